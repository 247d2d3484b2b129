// Recording surface shared by the host-side tests.

#![allow(dead_code)]
use glam::DVec2;
use wave_core::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    BackingSize(u32, u32),
    DisplaySize(f64, f64),
    ResetAndScale(f64),
    ClearRect(f64, f64, f64, f64),
    StrokeGradient(DVec2, DVec2, Vec<(f64, String)>),
    LineWidth(f64),
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    Stroke,
}

#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub commands: Vec<Cmd>,
    pub backing: (u32, u32),
    pub display: (f64, f64),
    pub scale: f64,
}

impl RecordingSurface {
    pub fn count(&self, pred: impl Fn(&Cmd) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Commands issued since the last `ClearRect`, i.e. the most recent frame.
    pub fn last_frame(&self) -> &[Cmd] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, Cmd::ClearRect(..)))
            .unwrap_or(0);
        &self.commands[start..]
    }
}

impl Surface for RecordingSurface {
    fn set_backing_size(&mut self, width_px: u32, height_px: u32) {
        self.backing = (width_px, height_px);
        self.commands.push(Cmd::BackingSize(width_px, height_px));
    }

    fn set_display_size(&mut self, width: f64, height: f64) {
        self.display = (width, height);
        self.commands.push(Cmd::DisplaySize(width, height));
    }

    fn reset_and_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.commands.push(Cmd::ResetAndScale(scale));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(Cmd::ClearRect(x, y, width, height));
    }

    fn set_stroke_gradient(&mut self, start: DVec2, end: DVec2, stops: &[(f64, &str)]) {
        let stops = stops.iter().map(|(o, c)| (*o, c.to_string())).collect();
        self.commands.push(Cmd::StrokeGradient(start, end, stops));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(Cmd::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.commands.push(Cmd::BeginPath);
    }

    fn move_to(&mut self, p: DVec2) {
        self.commands.push(Cmd::MoveTo(p));
    }

    fn line_to(&mut self, p: DVec2) {
        self.commands.push(Cmd::LineTo(p));
    }

    fn stroke(&mut self) {
        self.commands.push(Cmd::Stroke);
    }
}
