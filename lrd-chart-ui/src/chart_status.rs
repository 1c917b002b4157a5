//! Per-chart render status shown around each D3 container.

/// What a chart container currently holds.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartStatus {
    /// Waiting for data or for the chart scripts
    Pending,
    /// Handed to D3 with this many slices or points
    Rendered { items: usize, noun: &'static str },
    /// Nothing matched the controls; the container is cleared
    Empty { message: String },
}

impl ChartStatus {
    /// Status for a chart with `items` drawable elements.
    pub fn for_items(items: usize, noun: &'static str, empty_message: &str) -> Self {
        if items == 0 {
            ChartStatus::Empty {
                message: empty_message.to_string(),
            }
        } else {
            ChartStatus::Rendered { items, noun }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ChartStatus::Pending)
    }

    /// Short line shown under the chart, if any.
    pub fn caption(&self) -> Option<String> {
        match self {
            ChartStatus::Pending => None,
            ChartStatus::Rendered { items, noun } => {
                let plural = if *items == 1 { "" } else { "s" };
                Some(format!("{} {}{}", items, noun, plural))
            }
            ChartStatus::Empty { message } => Some(message.clone()),
        }
    }
}
