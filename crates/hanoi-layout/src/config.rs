// Layout configuration: scale, node geometry and disk colours.

use hanoi_core::{DISK_COUNT, Disk};

use crate::LayoutError;

/// Multiplier applied to the unit-size embedding.
pub const DEFAULT_SCALE: f64 = 1500.0;

/// Diameter of the board drawing inside each node.
pub const DEFAULT_NODE_SIZE: f64 = 120.0;

/// Extra radius of the circle drawn around each node.
pub const DEFAULT_NODE_RING: f64 = 10.0;

/// Margin between the outermost nodes and the viewport edge.
pub const DEFAULT_PADDING: f64 = 50.0;

/// Disk colours, disk 1 first: red, yellow, green, blue.
pub const DEFAULT_DISK_COLORS: [&str; DISK_COUNT] = ["#ef4444", "#eab308", "#22c55e", "#3b82f6"];

pub const DEFAULT_EDGE_STROKE_WIDTH: f64 = 1.0;

pub const DEFAULT_EDGE_OPACITY: f64 = 0.6;

/// Sizes, scale and colours used to lay out the state graph.
///
/// Passed explicitly to every layout function; there is no global layout
/// state. [`LayoutConfig::default`] gives the documented values.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub scale: f64,
    pub node_size: f64,
    pub node_ring: f64,
    pub padding: f64,
    /// Colour of edges along which each disk moves, disk 1 first.
    pub disk_colors: [String; DISK_COUNT],
    pub edge_stroke_width: f64,
    pub edge_opacity: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            node_size: DEFAULT_NODE_SIZE,
            node_ring: DEFAULT_NODE_RING,
            padding: DEFAULT_PADDING,
            disk_colors: DEFAULT_DISK_COLORS.map(String::from),
            edge_stroke_width: DEFAULT_EDGE_STROKE_WIDTH,
            edge_opacity: DEFAULT_EDGE_OPACITY,
        }
    }
}

impl LayoutConfig {
    /// Colour of the edges along which `disk` moves.
    pub fn color_of(&self, disk: Disk) -> &str {
        &self.disk_colors[disk.index()]
    }

    /// Radius of the circle drawn for each node.
    pub fn node_radius(&self) -> f64 {
        self.node_size / 2.0 + self.node_ring
    }

    /// Distance added around the outermost node centres to form the viewport.
    pub fn margin(&self) -> f64 {
        self.node_size / 2.0 + self.padding
    }

    /// Reject sizes that would produce a degenerate or non-finite layout.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = [
            ("scale", self.scale),
            ("node_size", self.node_size),
            ("edge_stroke_width", self.edge_stroke_width),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }

        let non_negative = [("node_ring", self.node_ring), ("padding", self.padding)];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be a non-negative finite number, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.edge_opacity) {
            return Err(LayoutError::InvalidConfig(format!(
                "edge_opacity must be within 0..=1, got {}",
                self.edge_opacity
            )));
        }

        if let Some(i) = self.disk_colors.iter().position(|c| c.trim().is_empty()) {
            return Err(LayoutError::InvalidConfig(format!(
                "colour of disk {} is empty",
                i + 1
            )));
        }

        Ok(())
    }
}
