/// A single plotted point: time on the x axis, voltage on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SamplePoint {
    pub time: f64,
    pub voltage: f64,
}

impl SamplePoint {
    pub fn new(time: f64, voltage: f64) -> Self {
        Self { time, voltage }
    }
}

/// An ordered sequence of points drawn as one line on the chart.
#[derive(Debug, Clone)]
pub struct Series {
    name: &'static str,
    points: Vec<SamplePoint>,
    visible: bool,
}

impl Series {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            points: Vec::new(),
            visible: true,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn push(&mut self, point: SamplePoint) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn last(&self) -> Option<&SamplePoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Flip visibility and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}
