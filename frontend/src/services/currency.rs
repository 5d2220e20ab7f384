use js_sys::{Array, Function, Intl, Object, Reflect};
use shared::currency::format_fallback;
use shared::TrackerConfig;
use wasm_bindgen::JsValue;

thread_local! {
    static FORMATTER: CurrencyFormatter = CurrencyFormatter::new(&crate::app_config());
}

/// Format an amount in the configured currency
pub fn format_currency(amount: f64) -> String {
    FORMATTER.with(|formatter| formatter.format(amount))
}

/// Locale-aware currency formatting through `Intl.NumberFormat`, falling back
/// to `symbol + two decimals` when the browser can't provide it.
pub struct CurrencyFormatter {
    format: Option<Function>,
    symbol: String,
}

impl CurrencyFormatter {
    pub fn new(config: &TrackerConfig) -> Self {
        let supported =
            intl_available() && is_valid_currency(&config.currency_code, &config.currency_locale);
        let format = if supported {
            let locales = Array::of1(&JsValue::from_str(&config.currency_locale));
            let options = Object::new();
            let configured = Reflect::set(&options, &"style".into(), &"currency".into())
                .and_then(|_| {
                    let code = JsValue::from_str(&config.currency_code);
                    Reflect::set(&options, &"currency".into(), &code)
                });
            configured.ok().map(|_| Intl::NumberFormat::new(&locales, &options).format())
        } else {
            None
        };

        if format.is_none() {
            log::warn!("Intl.NumberFormat unavailable, using plain currency formatting");
        }

        Self {
            format,
            symbol: config.currency_symbol.clone(),
        }
    }

    pub fn format(&self, amount: f64) -> String {
        self.format
            .as_ref()
            .and_then(|format| format.call1(&JsValue::NULL, &JsValue::from_f64(amount)).ok())
            .and_then(|formatted| formatted.as_string())
            .unwrap_or_else(|| format_fallback(&self.symbol, amount))
    }
}

fn intl_available() -> bool {
    Reflect::has(&js_sys::global(), &"Intl".into()).unwrap_or(false)
}

/// `Intl.NumberFormat` throws on malformed currency codes or locale tags.
fn is_valid_currency(code: &str, locale: &str) -> bool {
    code.len() == 3
        && code.chars().all(|c| c.is_ascii_alphabetic())
        && !locale.is_empty()
        && locale.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}


#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_formats_with_intl() {
        let formatter = CurrencyFormatter::new(&TrackerConfig::default());
        let formatted = formatter.format(1500.0);
        assert!(formatted.contains("1,500.00"), "unexpected: {}", formatted);
        assert!(formatted.contains('₹'));
    }

    #[wasm_bindgen_test]
    fn test_invalid_currency_falls_back() {
        let config = TrackerConfig {
            currency_code: "not-a-code".to_string(),
            currency_symbol: "¤".to_string(),
            ..TrackerConfig::default()
        };
        assert_eq!(CurrencyFormatter::new(&config).format(2.5), "¤2.50");
    }
}
