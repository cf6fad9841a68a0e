//! # Tool Catalog
//!
//! The list of tools offered by the toolkit, grouped by category. Front ends
//! use it to build menus and to decide which tools can actually be opened.
//!
//! ```rust
//! use calc_core::catalog::{self, ToolCategory};
//!
//! let emi = catalog::find("emi-calculator").unwrap();
//! assert_eq!(emi.category, ToolCategory::Finance);
//! assert!(emi.available);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::CalcError;

/// Grouping shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ToolCategory {
    Finance,
    Health,
    Math,
    #[serde(rename = "PDF")]
    Pdf,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::Finance,
        ToolCategory::Health,
        ToolCategory::Math,
        ToolCategory::Pdf,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolCategory::Finance => "Finance",
            ToolCategory::Health => "Health",
            ToolCategory::Math => "Math",
            ToolCategory::Pdf => "PDF",
        }
    }

    /// Calculators vs. document tools
    pub fn is_calculator(self) -> bool {
        !matches!(self, ToolCategory::Pdf)
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToolCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::unknown_option("category", s, &["finance", "health", "math", "pdf"]))
    }
}

/// One entry in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    /// Stable identifier, also the last route segment
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
    /// False for tools that are listed but not built yet
    pub available: bool,
}

impl ToolInfo {
    /// Route under which the tool is served, e.g. `/emi-calculator`
    pub fn route(&self) -> String {
        format!("/{}", self.slug)
    }
}

const TOOLS: [ToolInfo; 5] = [
    ToolInfo {
        slug: "emi-calculator",
        title: "EMI Calculator",
        description: "Calculate your Equated Monthly Installment for loans with detailed breakdown and payment schedule.",
        category: ToolCategory::Finance,
        available: true,
    },
    ToolInfo {
        slug: "bmi-calculator",
        title: "BMI Calculator",
        description: "Calculate your Body Mass Index and get personalized health insights based on WHO standards.",
        category: ToolCategory::Health,
        available: true,
    },
    ToolInfo {
        slug: "percentage-calculator",
        title: "Percentage Calculator",
        description: "Calculate percentages, percentage increase, decrease, and find what percentage one number is of another.",
        category: ToolCategory::Math,
        available: true,
    },
    ToolInfo {
        slug: "pdf-to-text",
        title: "PDF to Text",
        description: "Extract text content from PDF documents quickly and accurately. Perfect for data extraction and analysis.",
        category: ToolCategory::Pdf,
        available: true,
    },
    ToolInfo {
        slug: "pdf-merger",
        title: "PDF Merger",
        description: "Combine multiple PDF files into a single document. Simple, fast, and secure.",
        category: ToolCategory::Pdf,
        available: false,
    },
];

/// All tools in display order.
pub fn all_tools() -> &'static [ToolInfo] {
    &TOOLS
}

/// Look up a tool by slug (case-insensitive).
pub fn find(slug: &str) -> Option<&'static ToolInfo> {
    TOOLS.iter().find(|t| t.slug.eq_ignore_ascii_case(slug.trim()))
}

/// Tools in one category, in display order.
pub fn by_category(category: ToolCategory) -> impl Iterator<Item = &'static ToolInfo> {
    TOOLS.iter().filter(move |t| t.category == category)
}
