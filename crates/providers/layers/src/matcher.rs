use std::collections::HashMap;

use frizbee::{Config, match_list};

use crate::store::SearchLayer;

/// Number of attribute values scored per `match_list` call.
const MATCH_CHUNK_SIZE: usize = 512;

/// Dataset size above which the prefilter pays for itself.
const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Builds fuzzy matching options for the provided query and dataset size.
fn config_for_query(query: &str, dataset_len: usize) -> Config {
    let mut config = Config::default();

    let length = query.chars().count();
    let mut allowed_typos: u16 = match length {
        0..=1 => 0,
        2..=4 => 1,
        5..=7 => 2,
        8..=12 => 3,
        _ => 4,
    };
    if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
        allowed_typos = allowed_typos.min(max_reasonable);
    }

    if dataset_len >= PREFILTER_ENABLE_THRESHOLD {
        config.max_typos = Some(allowed_typos);
    } else {
        config.max_typos = None;
    }

    config.sort = false;

    config
}

/// The best-scoring attribute hit for one layer feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMatch {
    /// Index of the feature within the layer.
    pub feature_index: usize,
    pub attribute: String,
    pub value: String,
    pub score: u16,
}

struct Candidate<'a> {
    feature_index: usize,
    attribute: &'a str,
    value: &'a str,
}

/// Fuzzy-match `keyword` against every attribute value in the layer.
///
/// Each feature contributes at most one match (its best-scoring attribute);
/// matches are ranked by score, ties broken by stable feature order.
#[must_use]
pub fn match_attributes(layer: &SearchLayer, keyword: &str) -> Vec<AttributeMatch> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<Candidate<'_>> = layer
        .features()
        .iter()
        .enumerate()
        .flat_map(|(feature_index, feature)| {
            feature.properties.iter().map(move |(name, value)| Candidate {
                feature_index,
                attribute: name.as_str(),
                value: value.as_str(),
            })
        })
        .collect();

    let config = config_for_query(trimmed, candidates.len());
    let mut best: HashMap<usize, AttributeMatch> = HashMap::new();
    let mut haystacks = Vec::with_capacity(MATCH_CHUNK_SIZE);

    let mut offset = 0;
    while offset < candidates.len() {
        let end = (offset + MATCH_CHUNK_SIZE).min(candidates.len());
        haystacks.clear();
        for candidate in &candidates[offset..end] {
            haystacks.push(candidate.value);
        }

        for entry in match_list(trimmed, &haystacks, &config) {
            if entry.score == 0 {
                continue;
            }
            let candidate = &candidates[offset + entry.index as usize];
            let replace = best
                .get(&candidate.feature_index)
                .is_none_or(|current| entry.score > current.score);
            if replace {
                best.insert(
                    candidate.feature_index,
                    AttributeMatch {
                        feature_index: candidate.feature_index,
                        attribute: candidate.attribute.to_string(),
                        value: candidate.value.to_string(),
                        score: entry.score,
                    },
                );
            }
        }

        offset = end;
    }

    let mut matches: Vec<AttributeMatch> = best.into_values().collect();
    matches.sort_unstable_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.feature_index.cmp(&b.feature_index))
    });
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypost_widget_api::{Feature, FeatureId, LatLng};

    fn layer() -> SearchLayer {
        SearchLayer::new(
            "districts",
            vec![
                Feature::point(FeatureId::new(1), LatLng::new(0.0, 0.0))
                    .with_property("name", "Old Town")
                    .with_property("category", "historic"),
                Feature::point(FeatureId::new(2), LatLng::new(0.0, 1.0))
                    .with_property("name", "New Town")
                    .with_property("category", "residential"),
                Feature::point(FeatureId::new(3), LatLng::new(0.0, 2.0))
                    .with_property("name", "Harbor")
                    .with_property("category", "industrial"),
            ],
        )
    }

    #[test]
    fn empty_keyword_matches_nothing() {
        assert!(match_attributes(&layer(), "   ").is_empty());
    }

    #[test]
    fn full_matches_outrank_partial_alignments() {
        let matches = match_attributes(&layer(), "town");
        assert!(matches.len() >= 2);
        // Both "Town" values tie on score, so stable feature order decides.
        assert_eq!(matches[0].feature_index, 0);
        assert_eq!(matches[1].feature_index, 1);
        let indices: Vec<usize> = matches.iter().map(|m| m.feature_index).collect();
        assert_eq!(
            indices.len(),
            indices.iter().collect::<std::collections::HashSet<_>>().len(),
            "each feature should contribute at most one match"
        );
    }

    #[test]
    fn exact_value_outranks_looser_match() {
        let matches = match_attributes(&layer(), "Harbor");
        assert_eq!(matches[0].feature_index, 2);
        assert_eq!(matches[0].attribute, "name");
        assert_eq!(matches[0].value, "Harbor");
    }

    #[test]
    fn typo_budget_scales_with_query_length() {
        let short = config_for_query("ab", PREFILTER_ENABLE_THRESHOLD);
        assert_eq!(short.max_typos, Some(1));
        let long = config_for_query("a-much-longer-query", PREFILTER_ENABLE_THRESHOLD);
        assert_eq!(long.max_typos, Some(4));
        let small = config_for_query("ab", PREFILTER_ENABLE_THRESHOLD - 1);
        assert_eq!(small.max_typos, None);
    }
}
