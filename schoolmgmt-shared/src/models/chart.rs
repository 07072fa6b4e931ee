//! Declarative doughnut chart data for the dashboard.
//!
//! Each [`DashboardChart`] owns a static [`ChartSpec`]. It turns into a
//! Chart.js configuration through [`ChartSpec::to_config`], whose field names
//! serialize to the camel-case keys Chart.js expects.

use serde::Serialize;
use strum::EnumIter;

/// Legend placement and label styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendStyle {
    pub position: LegendPosition,
    pub font_size: u32,
    pub padding: u32,
    pub point_style: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
    Bottom,
    Left,
}

/// Static description of one doughnut chart.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartSpec {
    /// Id of the `<canvas>` mount point.
    pub mount_id: &'static str,
    pub title: &'static str,
    pub labels: &'static [&'static str],
    pub values: &'static [u32],
    pub colors: &'static [&'static str],
    pub legend: LegendStyle,
    /// Whether clicking a segment updates the center display.
    pub inspectable: bool,
    /// Whether the rotate/scale entry animation is configured.
    pub animated: bool,
}

/// One clicked or displayed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub label: &'static str,
    pub value: u32,
}

/// The four dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DashboardChart {
    StudentDistribution,
    Gender,
    Religion,
    Category,
}

const BOTTOM_LEGEND: LegendStyle = LegendStyle {
    position: LegendPosition::Bottom,
    font_size: 12,
    padding: 10,
    point_style: false,
};

static STUDENT_DISTRIBUTION: ChartSpec = ChartSpec {
    mount_id: "studentChart",
    title: "Student Distribution",
    labels: &[
        "Nursery", "KG", "Class 1", "Class 2", "Class 3", "Class 4", "Class 5", "Class 6",
        "Class 7", "Class 8", "Class 9", "Class 10",
    ],
    values: &[25, 22, 18, 16, 15, 14, 13, 12, 11, 10, 9, 8],
    colors: &[
        "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#84cc16", "#f97316",
        "#ec4899", "#6366f1", "#14b8a6", "#f43f5e",
    ],
    legend: LegendStyle {
        position: LegendPosition::Right,
        font_size: 10,
        padding: 8,
        point_style: true,
    },
    inspectable: true,
    animated: true,
};

static GENDER: ChartSpec = ChartSpec {
    mount_id: "genderChart",
    title: "Gender",
    labels: &["Boys", "Girls"],
    values: &[169, 21],
    colors: &["#3b82f6", "#ec4899"],
    legend: BOTTOM_LEGEND,
    inspectable: false,
    animated: false,
};

static RELIGION: ChartSpec = ChartSpec {
    mount_id: "religionChart",
    title: "Religion",
    labels: &["Hindu", "Muslim", "Christian", "Others"],
    values: &[120, 45, 20, 5],
    colors: &["#f59e0b", "#10b981", "#8b5cf6", "#6b7280"],
    legend: BOTTOM_LEGEND,
    inspectable: false,
    animated: false,
};

static CATEGORY: ChartSpec = ChartSpec {
    mount_id: "categoryChart",
    title: "Category",
    labels: &["General", "OBC", "SC", "ST"],
    values: &[95, 60, 25, 10],
    colors: &["#3b82f6", "#10b981", "#f59e0b", "#ef4444"],
    legend: BOTTOM_LEGEND,
    inspectable: false,
    animated: false,
};

impl DashboardChart {
    #[must_use]
    pub fn spec(self) -> &'static ChartSpec {
        match self {
            Self::StudentDistribution => &STUDENT_DISTRIBUTION,
            Self::Gender => &GENDER,
            Self::Religion => &RELIGION,
            Self::Category => &CATEGORY,
        }
    }
}

impl ChartSpec {
    /// Segment at `index`, if the index is in range.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<Segment> {
        Some(Segment {
            label: *self.labels.get(index)?,
            value: *self.values.get(index)?,
        })
    }

    /// Sum of all segment values.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// Build the Chart.js configuration. Callbacks are attached separately.
    #[must_use]
    pub fn to_config(&self) -> ChartConfig {
        ChartConfig {
            kind: "doughnut",
            data: ChartData {
                labels: self.labels.to_vec(),
                datasets: vec![Dataset {
                    data: self.values.to_vec(),
                    background_color: self.colors.to_vec(),
                    border_width: 0,
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                cutout: "60%",
                animation: self.animated.then_some(AnimationOptions {
                    animate_rotate: true,
                    animate_scale: true,
                    duration: 1000,
                }),
                hover: self.animated.then_some(HoverOptions {
                    animation_duration: 300,
                }),
                plugins: PluginOptions {
                    legend: LegendOptions {
                        display: self.legend.point_style.then_some(true),
                        position: self.legend.position,
                        labels: LegendLabels {
                            font_size: self.legend.font_size,
                            padding: self.legend.padding,
                            use_point_style: self.legend.point_style.then_some(true),
                        },
                    },
                },
            },
        }
    }
}

/// Text shown in the chart center region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterDisplay {
    pub label: String,
    pub value: String,
}

impl CenterDisplay {
    /// Initial display: the chart total.
    #[must_use]
    pub fn total(spec: &ChartSpec) -> Self {
        Self {
            label: "Total Students".to_string(),
            value: spec.total().to_string(),
        }
    }
}

impl From<Segment> for CenterDisplay {
    fn from(segment: Segment) -> Self {
        Self {
            label: segment.label.to_string(),
            value: segment.value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<u32>,
    pub background_color: Vec<&'static str>,
    pub border_width: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub cutout: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverOptions>,
    pub plugins: PluginOptions,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationOptions {
    pub animate_rotate: bool,
    pub animate_scale: bool,
    pub duration: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverOptions {
    pub animation_duration: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    pub position: LegendPosition,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub font_size: u32,
    pub padding: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_point_style: Option<bool>,
}
