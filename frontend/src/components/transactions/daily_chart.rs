use crate::services::date_utils::format_axis_label;
use crate::services::logging::Logger;
use chrono::NaiveDate;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::DailySeries;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 320;
const INCOME_COLOR: RGBColor = RGBColor(46, 160, 67);
const EXPENSE_COLOR: RGBColor = RGBColor(218, 54, 51);

#[derive(Properties, PartialEq)]
pub struct DailyChartProps {
    pub series: DailySeries,
    pub loading: bool,
}

/// The one chart bound to the history canvas. Each new series clears the
/// previous drawing before the replacement is drawn.
pub struct ChartSurface {
    canvas: HtmlCanvasElement,
    drawn: Option<DailySeries>,
}

impl ChartSurface {
    fn bind(canvas: HtmlCanvasElement) -> Self {
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);
        Self { canvas, drawn: None }
    }

    fn is_showing(&self, series: &DailySeries) -> bool {
        self.drawn.as_ref() == Some(series)
    }

    /// Wipe whatever is on the canvas.
    fn dispose(&mut self) {
        if self.drawn.take().is_none() {
            return;
        }
        if let Some(backend) = CanvasBackend::with_canvas_object(self.canvas.clone()) {
            let _ = backend.into_drawing_area().fill(&WHITE);
        }
    }

    fn replace(&mut self, series: &DailySeries) {
        self.dispose();
        match draw_series(&self.canvas, series) {
            Ok(()) => self.drawn = Some(series.clone()),
            Err(e) => {
                Logger::warn_with_component("daily-chart", &format!("Failed to draw chart: {}", e))
            }
        }
    }
}

pub struct DailyChart {
    canvas_ref: NodeRef,
    surface: Option<ChartSurface>,
}

impl Component for DailyChart {
    type Message = ();
    type Properties = DailyChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            surface: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.redraw(&ctx.props().series);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(surface) = self.surface.as_mut() {
            surface.dispose();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let title = match (props.series.dates.first(), props.series.dates.last()) {
            (Some(first), Some(last)) => format!(
                "Last 7 days ({} to {})",
                format_axis_label(*first),
                format_axis_label(*last)
            ),
            _ => "Last 7 days".to_string(),
        };

        html! {
            <section class="card chart-section">
                <div class="chart-title-header">
                    <h2 class="chart-title">{title}</h2>
                    {if props.loading {
                        html! { <span class="muted">{"Refreshing..."}</span> }
                    } else { html! {} }}
                </div>
                <canvas id="historyChart" ref={self.canvas_ref.clone()}></canvas>
            </section>
        }
    }
}

impl DailyChart {
    fn redraw(&mut self, series: &DailySeries) {
        if self.surface.is_none() {
            self.surface = self.canvas_ref.cast::<HtmlCanvasElement>().map(ChartSurface::bind);
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if surface.is_showing(series) {
            return;
        }
        Logger::debug_with_component(
            "daily-chart",
            &format!("Redrawing chart with {} days", series.len()),
        );
        surface.replace(series);
    }
}

fn draw_series(canvas: &HtmlCanvasElement, series: &DailySeries) -> Result<(), String> {
    if series.is_empty() {
        return Ok(());
    }

    let backend = CanvasBackend::with_canvas_object(canvas.clone())
        .ok_or_else(|| "canvas has no 2d context".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{:?}", e))?;

    let last_index = (series.len() - 1) as f64;
    // The y axis always starts at zero; keep some headroom above the tallest point.
    let y_max = (series.max_value() * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..last_index.max(1.0), 0f64..y_max)
        .map_err(|e| format!("{:?}", e))?;

    let dates = series.dates.clone();
    chart
        .configure_mesh()
        .x_labels(series.len())
        .y_labels(6)
        .x_label_formatter(&|x: &f64| day_label(&dates, *x))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .label_style(("sans-serif", 12))
        .axis_style(&RGBColor(220, 220, 220))
        .bold_line_style(&RGBColor(240, 240, 240))
        .light_line_style(&RGBColor(250, 250, 250))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    for (values, color, label) in [
        (&series.income, INCOME_COLOR, "Income"),
        (&series.expense, EXPENSE_COLOR, "Expense"),
    ] {
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(|e| format!("{:?}", e))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart
            .draw_series(points.into_iter().map(|point| Circle::new(point, 3, color.filled())))
            .map_err(|e| format!("{:?}", e))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerMiddle)
        .background_style(WHITE.mix(0.8))
        .border_style(&RGBColor(220, 220, 220))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    root.present().map_err(|e| format!("{:?}", e))?;
    Ok(())
}

/// Label for an x position; only whole day indices inside the series get one.
fn day_label(dates: &[NaiveDate], x: f64) -> String {
    let index = x.round();
    if index < 0.0 || (x - index).abs() > f64::EPSILON {
        return String::new();
    }
    dates
        .get(index as usize)
        .map(|date| format_axis_label(*date))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates() -> Vec<NaiveDate> {
        (4..=10).map(|day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap()).collect()
    }

    #[test]
    fn test_day_label_for_whole_indices() {
        assert_eq!(day_label(&dates(), 0.0), "03/04");
        assert_eq!(day_label(&dates(), 6.0), "03/10");
    }

    #[test]
    fn test_day_label_skips_fractions_and_out_of_range() {
        assert_eq!(day_label(&dates(), 2.5), "");
        assert_eq!(day_label(&dates(), -1.0), "");
        assert_eq!(day_label(&dates(), 7.0), "");
        assert_eq!(day_label(&[], 0.0), "");
    }
}
