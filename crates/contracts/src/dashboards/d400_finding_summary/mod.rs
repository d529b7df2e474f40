pub mod aggregation;
pub mod dto;

pub use aggregation::{
    build_dashboard, category_distribution, combination_frequency, frequency_band_summary,
    scope_by_part, top_contributors,
};
pub use dto::{
    BandSummary, CategorySlice, CombinationFrequency, ContributorCount, FindingDashboard,
    FrequencyBand, TOP_CONTRIBUTORS_LIMIT, UNASSIGNED_LABEL,
};
