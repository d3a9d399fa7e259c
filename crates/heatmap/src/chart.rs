//! Heatmap chart composition.
//!
//! Produces the full deterministic draw sequence: background, title block,
//! month headers, per-city rows, annual-total column, gradient legend and
//! footer. Draw order matters; later strokes overdraw earlier fills to
//! create the cell separation.

use image::RgbaImage;
use tracing::debug;

use crate::canvas::{Align, Canvas, Weight};
use crate::dataset::{City, MONTHS};
use crate::error::ChartResult;
use crate::layout::{Layout, LayoutConfig};
use crate::scale::{ColorScale, Rgb, DARK_TEXT};

const TITLE: &str = "Which U.S. Cities Get the Most Sunshine, and When?";
const SUBTITLE: &str = "Average Monthly Hours of Sunshine in Six Major Cities (1981\u{2013}2010)";
const CAPTION: &str =
    "Cities ordered by latitude (north to south). Values show hours of sunshine per month.";
const LEGEND_TITLE: &str = "Hours of Sunshine per Month";
const FOOTER: &str = "Data source: usclimatedata.com | Averages over 1981\u{2013}2010";

/// Legend tick positions, in hours.
const LEGEND_TICKS: [f32; 7] = [50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 330.0];

/// Canvas colors outside the data-driven gradient.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Rgb,
    pub ink: Rgb,
    pub subtitle: Rgb,
    pub caption: Rgb,
    pub muted: Rgb,
    pub annual_fill: Rgb,
    pub annual_sub: Rgb,
    pub row_rule: Rgb,
    pub border: Rgb,
    pub tick: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::new(0xfa, 0xfa, 0xf7),
            ink: DARK_TEXT,
            subtitle: Rgb::new(0x55, 0x55, 0x55),
            caption: Rgb::new(0x88, 0x88, 0x88),
            muted: Rgb::new(0x99, 0x99, 0x99),
            annual_fill: Rgb::new(0xf0, 0xed, 0xe6),
            annual_sub: Rgb::new(0x77, 0x77, 0x77),
            row_rule: Rgb::new(0xe8, 0xe5, 0xdd),
            border: Rgb::new(0xcc, 0xcc, 0xcc),
            tick: Rgb::new(0x88, 0x88, 0x88),
        }
    }
}

/// The city-by-month sunshine heatmap.
pub struct HeatmapChart<'a> {
    cities: &'a [City],
    scale: ColorScale,
    layout: Layout,
    theme: Theme,
}

impl<'a> HeatmapChart<'a> {
    pub fn new(cities: &'a [City], scale: ColorScale, cfg: LayoutConfig) -> Self {
        let layout = Layout::new(cfg, cities.len());
        Self {
            cities,
            scale,
            layout,
            theme: Theme::default(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Render the complete chart to an RGBA image.
    ///
    /// Pure function of the dataset, scale and layout constants; repeated
    /// renders produce byte-identical pixels.
    pub fn render(&self) -> ChartResult<RgbaImage> {
        let mut canvas = Canvas::new(
            self.layout.width(),
            self.layout.height(),
            self.theme.background,
        )?;

        self.draw_titles(&mut canvas);
        self.draw_headers(&mut canvas);
        for (row, city) in self.cities.iter().enumerate() {
            self.draw_row(&mut canvas, row, city);
        }
        self.draw_legend(&mut canvas);

        debug!(
            width = canvas.width(),
            height = canvas.height(),
            rows = self.cities.len(),
            "Rendered heatmap"
        );
        Ok(canvas.into_image())
    }

    fn draw_titles(&self, canvas: &mut Canvas) {
        let center_x = self.layout.width() as i32 / 2;
        canvas.text(TITLE, center_x, 40, 22.0, Weight::Bold, Align::Center, self.theme.ink);
        canvas.text(
            SUBTITLE,
            center_x,
            62,
            14.0,
            Weight::Regular,
            Align::Center,
            self.theme.subtitle,
        );
        canvas.text(
            CAPTION,
            center_x,
            82,
            12.0,
            Weight::Regular,
            Align::Center,
            self.theme.caption,
        );
    }

    fn draw_headers(&self, canvas: &mut Canvas) {
        let cfg = &self.layout.cfg;
        let baseline = (cfg.top_margin + cfg.header_h - 12) as i32;

        for (col, month) in MONTHS.iter().enumerate() {
            let x = self.layout.grid_x() + col as u32 * cfg.cell_w + cfg.cell_w / 2;
            canvas.text(month, x as i32, baseline, 13.0, Weight::Bold, Align::Center, self.theme.ink);
        }
        let annual_center = self.layout.annual_x() + cfg.annual_w / 2;
        canvas.text(
            "Annual",
            annual_center as i32,
            baseline,
            13.0,
            Weight::Bold,
            Align::Center,
            self.theme.ink,
        );

        // Thin divider under the header band
        canvas.hline(
            self.layout.grid_x() as i32,
            self.layout.row_right() as i32,
            self.layout.grid_y() as i32,
            self.theme.border,
        );
    }

    fn draw_row(&self, canvas: &mut Canvas, row: usize, city: &City) {
        let cfg = &self.layout.cfg;
        let y = self.layout.row_y(row) as i32;
        let center_y = y + cfg.cell_h as i32 / 2;
        let label_x = self.layout.grid_x() as i32 - 12;

        canvas.text(
            city.name,
            label_x,
            center_y + 1,
            14.0,
            Weight::Bold,
            Align::Right,
            self.theme.ink,
        );
        canvas.text(
            &format!("{:.1}\u{b0}N", city.lat),
            label_x,
            center_y + 16,
            11.0,
            Weight::Regular,
            Align::Right,
            self.theme.muted,
        );

        for (col, &value) in city.monthly.iter().enumerate() {
            let (x, _) = self.layout.cell_origin(row, col);
            let x = x as i32;

            canvas.fill_rect(
                x + 1,
                y + 1,
                cfg.cell_w - 2,
                cfg.cell_h - 2,
                self.scale.color_for(value),
            );
            // Background-colored stroke separates adjacent cells
            canvas.stroke_rect(x, y, cfg.cell_w, cfg.cell_h, 2, self.theme.background);

            canvas.text(
                &format!("{}", value),
                x + cfg.cell_w as i32 / 2,
                center_y + 5,
                15.0,
                Weight::Bold,
                Align::Center,
                self.scale.text_color_for(value),
            );
        }

        // Annual-total cell: flat neutral fill, dark text
        let annual_x = self.layout.annual_x() as i32;
        let annual_center = annual_x + cfg.annual_w as i32 / 2;
        canvas.fill_rect(
            annual_x + 4,
            y + 1,
            cfg.annual_w - 6,
            cfg.cell_h - 2,
            self.theme.annual_fill,
        );
        canvas.text(
            &format_thousands(city.annual_total()),
            annual_center,
            center_y + 1,
            15.0,
            Weight::Bold,
            Align::Center,
            self.theme.ink,
        );
        canvas.text(
            "hrs/yr",
            annual_center,
            center_y + 16,
            11.0,
            Weight::Regular,
            Align::Center,
            self.theme.annual_sub,
        );

        if row + 1 < self.cities.len() {
            let rule_y = y + cfg.cell_h as i32;
            canvas.hline(
                cfg.pad as i32,
                self.layout.row_right() as i32,
                rule_y,
                self.theme.row_rule,
            );
        }
    }

    fn draw_legend(&self, canvas: &mut Canvas) {
        let cfg = &self.layout.cfg;
        let (legend_x, legend_y) = self.layout.legend_origin();
        let (legend_x, legend_y) = (legend_x as i32, legend_y as i32);
        let center_x = self.layout.width() as i32 / 2;
        let (min, max) = (self.scale.min(), self.scale.max());

        canvas.text(
            LEGEND_TITLE,
            center_x,
            legend_y - 8,
            12.0,
            Weight::Regular,
            Align::Center,
            self.theme.subtitle,
        );

        // Gradient bar, one pixel column at a time
        for i in 0..cfg.legend_w {
            let value = min + (i as f32 / cfg.legend_w as f32) * (max - min);
            canvas.fill_rect(
                legend_x + i as i32,
                legend_y,
                1,
                cfg.legend_h,
                self.scale.color_for(value),
            );
        }
        canvas.stroke_rect(legend_x, legend_y, cfg.legend_w, cfg.legend_h, 1, self.theme.border);

        if max > min {
            for &tick in LEGEND_TICKS.iter() {
                let x = legend_x + ((tick - min) / (max - min) * cfg.legend_w as f32) as i32;
                let bar_bottom = legend_y + cfg.legend_h as i32;
                canvas.vline(x, bar_bottom, bar_bottom + 4, self.theme.tick);
                canvas.text(
                    &format!("{}", tick),
                    x,
                    bar_bottom + 16,
                    11.0,
                    Weight::Regular,
                    Align::Center,
                    self.theme.subtitle,
                );
            }
        }

        canvas.text(
            FOOTER,
            center_x,
            legend_y + 45,
            11.0,
            Weight::Regular,
            Align::Center,
            self.theme.annual_sub,
        );
    }
}

/// Format an integral value with `,` thousands separators.
fn format_thousands(value: f32) -> String {
    let digits = format!("{}", value.round() as i64);
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}
