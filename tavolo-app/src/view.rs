//! Operator dashboard view state
//!
//! Each section is a tagged variant carrying its own data dependencies,
//! dispatched through one exhaustive `match` — there is no stringly-typed
//! section name anywhere.

use serde::{Deserialize, Serialize};

use shared::floorplan::FloorGrid;
use shared::models::{MenuItem, Reservation};

/// Section selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Menu,
    FloorPlan,
    Reservations,
}

/// A loaded dashboard section with its data
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardSection {
    /// Menu management
    Menu { items: Vec<MenuItem> },
    /// Floor-plan editor
    FloorPlan { grid: FloorGrid },
    /// Incoming reservation requests awaiting a decision
    Reservations { pending: Vec<Reservation> },
}

impl DashboardSection {
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Menu { .. } => SectionKind::Menu,
            Self::FloorPlan { .. } => SectionKind::FloorPlan,
            Self::Reservations { .. } => SectionKind::Reservations,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Menu { .. } => "Menu",
            Self::FloorPlan { .. } => "Floor plan",
            Self::Reservations { .. } => "Reservations",
        }
    }

    /// Whether the section has nothing to show yet
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Menu { items } => items.is_empty(),
            Self::FloorPlan { grid } => grid.table_count() == 0,
            Self::Reservations { pending } => pending.is_empty(),
        }
    }
}
