use super::super::domain::LeadSegment;
use super::config::ScoringConfig;

/// Maps a total score onto a segment, checking the highest bucket first.
pub(crate) fn segment_for(score: u32, config: &ScoringConfig) -> LeadSegment {
    if score >= config.hot_threshold {
        LeadSegment::Hot
    } else if score >= config.warm_threshold {
        LeadSegment::Warm
    } else {
        LeadSegment::Cold
    }
}
