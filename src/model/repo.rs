//! Repository records as returned by the metadata API, and the summaries the cards render.

use serde::{Deserialize, Serialize};

use crate::foundation::error::{BadgeError, BadgeResult};

/// At most this many language segments are kept per repository.
pub const MAX_SEGMENTS: usize = 8;
/// Smallest share a segment gets in the language bar, so tiny languages stay visible.
pub const MIN_SEGMENT_SHARE: f64 = 0.04;

const EDGE_FALLBACK_COLOR: &str = "#374151";
const PRIMARY_FALLBACK_COLOR: &str = "#6b7280";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageNode {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageEdge {
    pub size: u64,
    pub node: LanguageNode,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConnection {
    #[serde(default)]
    pub total_size: u64,
    #[serde(default)]
    pub edges: Vec<LanguageEdge>,
}

/// One repository node (GraphQL `Repository` shape).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoNode {
    pub name_with_owner: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazer_count: u64,
    #[serde(default)]
    pub fork_count: u64,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub primary_language: Option<LanguageNode>,
    #[serde(default)]
    pub languages: Option<LanguageConnection>,
}

/// Input document for the repo carousel: pinned repos and the owner's top repos by stars.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoCatalog {
    #[serde(default)]
    pub pinned: Vec<RepoNode>,
    #[serde(default)]
    pub top: Vec<RepoNode>,
}

/// `owner/name` reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Parse `owner/name`, or a bare `name` owned by `default_owner`.
    pub fn parse(s: &str, default_owner: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        match s.split_once('/') {
            Some((owner, name)) => Some(Self {
                owner: owner.trim().to_owned(),
                name: name.trim().to_owned(),
            }),
            None => Some(Self {
                owner: default_owner.to_owned(),
                name: s.to_owned(),
            }),
        }
    }

    /// Parse a comma-separated list; blank entries are skipped.
    pub fn parse_list(raw: &str, default_owner: &str) -> Vec<Self> {
        raw.split(',')
            .filter_map(|s| Self::parse(s, default_owner))
            .collect()
    }

    fn matches(&self, node: &RepoNode) -> bool {
        node.name_with_owner
            .eq_ignore_ascii_case(&format!("{}/{}", self.owner, self.name))
    }
}

/// One slice of the language bar.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LanguageSegment {
    pub name: String,
    pub color: String,
    /// Share of the repository's code; segments of one repo sum to 1.
    pub weight: f64,
}

/// What a repo card shows.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RepoSummary {
    pub owner: String,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub stars: u64,
    pub forks: u64,
    pub segments: Vec<LanguageSegment>,
}

impl RepoSummary {
    pub fn from_node(node: &RepoNode) -> Self {
        let (owner, short) = node
            .name_with_owner
            .split_once('/')
            .unwrap_or(("", node.name_with_owner.as_str()));
        let name = if node.name.is_empty() {
            short.to_owned()
        } else {
            node.name.clone()
        };

        let langs = node.languages.clone().unwrap_or_default();
        let mut segments: Vec<LanguageSegment> = langs
            .edges
            .iter()
            .map(|e| LanguageSegment {
                name: e.node.name.clone(),
                color: e
                    .node
                    .color
                    .clone()
                    .unwrap_or_else(|| EDGE_FALLBACK_COLOR.to_owned()),
                weight: if langs.total_size > 0 {
                    e.size as f64 / langs.total_size as f64
                } else {
                    0.0
                },
            })
            .filter(|s| s.weight > 0.0)
            .collect();

        if segments.is_empty() {
            let primary = node.primary_language.as_ref();
            segments.push(LanguageSegment {
                name: primary.map_or_else(|| "Other".to_owned(), |l| l.name.clone()),
                color: primary
                    .and_then(|l| l.color.clone())
                    .unwrap_or_else(|| PRIMARY_FALLBACK_COLOR.to_owned()),
                weight: 1.0,
            });
        }
        segments.truncate(MAX_SEGMENTS);
        normalize_weights(&mut segments);

        Self {
            owner: owner.to_owned(),
            name,
            full_name: node.name_with_owner.clone(),
            description: node.description.clone().unwrap_or_default(),
            stars: node.stargazer_count,
            forks: node.fork_count,
            segments,
        }
    }

    /// Pixel spans `(x_offset, width)` of the language bar for a bar `bar_width` wide.
    ///
    /// Each segment gets at least [`MIN_SEGMENT_SHARE`] of the bar; widths are whole pixels
    /// except the last, which absorbs rounding so the spans cover the bar exactly.
    pub fn bar_spans(&self, bar_width: f64) -> Vec<(f64, f64)> {
        let floored: Vec<f64> = self
            .segments
            .iter()
            .map(|s| s.weight.max(MIN_SEGMENT_SHARE))
            .collect();
        let sum: f64 = floored.iter().sum();
        if sum <= 0.0 {
            return Vec::new();
        }

        let mut acc = 0.0;
        let last = floored.len() - 1;
        floored
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let x = acc;
                let width = if i == last {
                    bar_width - x
                } else {
                    (w / sum * bar_width).round()
                };
                acc += width;
                (x, width)
            })
            .collect()
    }
}

fn normalize_weights(segments: &mut [LanguageSegment]) {
    let total: f64 = segments.iter().map(|s| s.weight).sum();
    if total > 0.0 {
        for s in segments.iter_mut() {
            s.weight /= total;
        }
    }
}

/// Pick the repositories to show.
///
/// An explicit list wins (unknown entries are skipped). Otherwise the non-archived pinned
/// repositories are used when there are at least two, else the non-archived top repositories.
pub fn select_repos(
    catalog: &RepoCatalog,
    explicit: &[RepoRef],
    max: usize,
) -> BadgeResult<Vec<RepoSummary>> {
    let chosen: Vec<&RepoNode> = if !explicit.is_empty() {
        explicit
            .iter()
            .filter_map(|r| {
                let found = catalog
                    .pinned
                    .iter()
                    .chain(&catalog.top)
                    .find(|n| r.matches(n));
                if found.is_none() {
                    tracing::warn!(owner = %r.owner, name = %r.name, "repository not in catalog; skipping");
                }
                found
            })
            .collect()
    } else {
        let pinned: Vec<&RepoNode> = catalog.pinned.iter().filter(|n| !n.is_archived).collect();
        if pinned.len() >= 2 {
            pinned
        } else {
            catalog.top.iter().filter(|n| !n.is_archived).collect()
        }
    };

    let out: Vec<RepoSummary> = chosen
        .into_iter()
        .take(max)
        .map(RepoSummary::from_node)
        .collect();
    if out.is_empty() {
        return Err(BadgeError::input("no repositories selected"));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(full: &str, archived: bool) -> RepoNode {
        RepoNode {
            name_with_owner: full.to_owned(),
            name: String::new(),
            description: None,
            stargazer_count: 1,
            fork_count: 0,
            is_archived: archived,
            primary_language: None,
            languages: None,
        }
    }

    #[test]
    fn parses_repo_refs() {
        let refs = RepoRef::parse_list(" a/b , c,, ", "me");
        assert_eq!(
            refs,
            vec![
                RepoRef {
                    owner: "a".into(),
                    name: "b".into()
                },
                RepoRef {
                    owner: "me".into(),
                    name: "c".into()
                },
            ]
        );
    }

    #[test]
    fn segments_normalize_and_fall_back() {
        let mut n = node("o/r", false);
        n.languages = Some(LanguageConnection {
            total_size: 300,
            edges: vec![
                LanguageEdge {
                    size: 200,
                    node: LanguageNode {
                        name: "Rust".into(),
                        color: Some("#dea584".into()),
                    },
                },
                LanguageEdge {
                    size: 100,
                    node: LanguageNode {
                        name: "Shell".into(),
                        color: None,
                    },
                },
            ],
        });
        let s = RepoSummary::from_node(&n);
        assert_eq!(s.owner, "o");
        assert_eq!(s.name, "r");
        assert_eq!(s.segments.len(), 2);
        assert_eq!(s.segments[1].color, "#374151");
        assert!((s.segments[0].weight - 2.0 / 3.0).abs() < 1e-12);

        let bare = RepoSummary::from_node(&node("o/empty", false));
        assert_eq!(bare.segments.len(), 1);
        assert_eq!(bare.segments[0].name, "Other");
        assert_eq!(bare.segments[0].color, "#6b7280");
        assert_eq!(bare.segments[0].weight, 1.0);
    }

    #[test]
    fn bar_spans_fill_the_bar() {
        let s = RepoSummary {
            owner: "o".into(),
            name: "r".into(),
            full_name: "o/r".into(),
            description: String::new(),
            stars: 0,
            forks: 0,
            segments: vec![
                LanguageSegment {
                    name: "A".into(),
                    color: "#000".into(),
                    weight: 0.99,
                },
                LanguageSegment {
                    name: "B".into(),
                    color: "#111".into(),
                    weight: 0.01,
                },
            ],
        };
        let spans = s.bar_spans(380.0);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].0, 0.0);
        assert_eq!(spans[1].0, spans[0].1);
        assert_eq!(spans[0].1 + spans[1].1, 380.0);
        // The tiny segment is floored at 4% of the bar.
        assert!(spans[1].1 >= 14.0);
    }

    #[test]
    fn selection_prefers_pinned_then_top() {
        let cat = RepoCatalog {
            pinned: vec![node("o/p1", false), node("o/p2", true)],
            top: vec![node("o/t1", false), node("o/t2", true), node("o/t3", false)],
        };
        let picked = select_repos(&cat, &[], 12).unwrap();
        let names: Vec<_> = picked.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["o/t1", "o/t3"]);

        let cat = RepoCatalog {
            pinned: vec![node("o/p1", false), node("o/p2", false)],
            top: vec![node("o/t1", false)],
        };
        let picked = select_repos(&cat, &[], 1).unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].full_name, "o/p1");
    }

    #[test]
    fn explicit_selection_wins_and_skips_unknown() {
        let cat = RepoCatalog {
            pinned: vec![node("o/p1", false), node("o/p2", false)],
            top: vec![node("O/T1", false)],
        };
        let refs = RepoRef::parse_list("t1,missing", "o");
        let picked = select_repos(&cat, &refs, 12).unwrap();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].full_name, "O/T1");

        let none = RepoRef::parse_list("missing", "o");
        assert!(select_repos(&cat, &none, 12).is_err());
    }
}
