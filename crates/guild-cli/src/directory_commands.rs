use crate::{CliError, CliResult};

use guild_core::{Availability, Category, CoreError, DirectoryPage, DirectoryState, SortKey};

use std::str::FromStr;

use clap::Args;
use serde::Serialize;

/// Value accepted by `--category` and `--availability` to mean "no filter"
pub(crate) const ALL: &str = "all";

#[derive(Args, Debug, Default)]
pub(crate) struct DirectoryArgs {
    /// Case-insensitive text matched against name, title and skills
    #[arg(long)]
    pub search: Option<String>,

    /// Category value (e.g. developer, farming) or "all"
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum rating, 0 to 5
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Availability value (e.g. available, part-time) or "all"
    #[arg(long)]
    pub availability: Option<String>,

    /// Maximum hourly rate
    #[arg(long)]
    pub max_rate: Option<f64>,

    /// rating-desc, rate-asc, rate-desc or name-asc
    #[arg(long)]
    pub sort: Option<String>,

    /// 1-based page number
    #[arg(long)]
    pub page: Option<usize>,
}

impl DirectoryArgs {
    /// Apply the flags the way the directory UI applies its controls:
    /// filters first, then sort, then the requested page.
    pub fn to_state(&self) -> CliResult<DirectoryState> {
        let mut state = DirectoryState::new();

        if let Some(ref search) = self.search {
            state.set_search(search.as_str());
        }
        if let Some(ref category) = self.category {
            state.set_category(parse_or_all::<Category>(category)?);
        }
        if let Some(min_rating) = self.min_rating {
            if !(0.0..=5.0).contains(&min_rating) {
                return Err(CliError::invalid_argument(
                    "--min-rating",
                    format!("{min_rating} is outside 0 to 5"),
                ));
            }
            state.set_min_rating(min_rating);
        }
        if let Some(ref availability) = self.availability {
            state.set_availability(parse_or_all::<Availability>(availability)?);
        }
        if let Some(max_rate) = self.max_rate {
            if max_rate.is_nan() || max_rate < 0.0 {
                return Err(CliError::invalid_argument(
                    "--max-rate",
                    format!("{max_rate} is not a non-negative rate"),
                ));
            }
            state.set_max_rate(Some(max_rate));
        }
        if let Some(ref sort) = self.sort {
            state.set_sort(sort.parse::<SortKey>()?);
        }
        if let Some(page) = self.page {
            state.set_page(page);
        }

        Ok(state)
    }
}

/// `None` for "all", otherwise the parsed value
fn parse_or_all<T>(value: &str) -> CliResult<Option<T>>
where
    T: FromStr<Err = CoreError>,
{
    if value.trim().eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    Ok(Some(value.trim().parse()?))
}

/// Directory output, tagged with where the profiles came from
#[derive(Debug, Serialize)]
pub(crate) struct DirectoryOutput {
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    pub sort: SortKey,
    #[serde(flatten)]
    pub page: DirectoryPage,
}
