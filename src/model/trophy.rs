use serde::{Deserialize, Serialize};

/// Lifetime statistics of an account.
///
/// `stars` is taken as-is when present; otherwise the per-repository counts in `repo_stars`
/// are summed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrophyStats {
    pub commits: u64,
    pub followers: u64,
    pub stars: Option<u64>,
    pub repo_stars: Vec<u64>,
    pub reviews: u64,
    pub issues: u64,
    pub repositories: u64,
    pub pull_requests: u64,
    pub total_contributions: u64,
}

impl TrophyStats {
    pub fn total_stars(&self) -> u64 {
        self.stars
            .unwrap_or_else(|| self.repo_stars.iter().copied().fold(0u64, u64::saturating_add))
    }

    /// Cards in display order.
    pub fn trophies(&self) -> Vec<Trophy> {
        vec![
            Trophy::new(
                "Commits",
                self.commits,
                "Commit contributions across all repos.",
            ),
            Trophy::new("Followers", self.followers, "People following this account."),
            Trophy::new(
                "Stars Earned",
                self.total_stars(),
                "Stargazers on owned repositories.",
            ),
            Trophy::new("Reviews", self.reviews, "Pull request reviews submitted."),
            Trophy::new("Issues", self.issues, "Issues created."),
            Trophy::new(
                "Repositories",
                self.repositories,
                "Owned non-fork repositories.",
            ),
            Trophy::new("Pull Requests", self.pull_requests, "Pull requests opened."),
            Trophy::new(
                "Total Activity",
                self.total_contributions,
                "All recorded contributions.",
            ),
        ]
    }
}

/// Letter shown next to a trophy value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Grade {
    S,
    A,
    B,
}

impl Grade {
    pub fn for_value(v: u64) -> Self {
        if v > 5000 {
            Self::S
        } else if v > 1000 {
            Self::A
        } else {
            Self::B
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
        }
    }
}

/// One statistic card.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trophy {
    pub title: String,
    pub value: u64,
    pub description: String,
}

impl Trophy {
    pub fn new(title: &str, value: u64, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            value,
            description: description.to_owned(),
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::for_value(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::for_value(0), Grade::B);
        assert_eq!(Grade::for_value(1000), Grade::B);
        assert_eq!(Grade::for_value(1001), Grade::A);
        assert_eq!(Grade::for_value(5000), Grade::A);
        assert_eq!(Grade::for_value(5001), Grade::S);
    }

    #[test]
    fn stars_sum_when_total_missing() {
        let s: TrophyStats = serde_json::from_str(r#"{"repoStars":[3,4,5]}"#).unwrap();
        assert_eq!(s.total_stars(), 12);

        let s: TrophyStats = serde_json::from_str(r#"{"stars":7,"repoStars":[3]}"#).unwrap();
        assert_eq!(s.total_stars(), 7);
    }

    #[test]
    fn eight_trophies_in_fixed_order() {
        let s = TrophyStats {
            commits: 1,
            pull_requests: 7,
            ..TrophyStats::default()
        };
        let t = s.trophies();
        assert_eq!(t.len(), 8);
        assert_eq!(t[0].title, "Commits");
        assert_eq!(t[0].value, 1);
        assert_eq!(t[6].title, "Pull Requests");
        assert_eq!(t[6].value, 7);
        assert_eq!(t[7].title, "Total Activity");
    }
}
