// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Governance votes table
//!
//! Tally tabs for a proposal and the paged list of individual votes, turned
//! into rows with finder links.

use serde::{Deserialize, Deserializer, Serialize};

use crate::finder::{Finder, LinkKind};
use crate::format::truncate;

/// Characters kept at each end of a truncated voter address
const VOTER_TRUNCATE: (usize, usize) = (10, 6);

/// A vote answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteOption {
    Yes,
    No,
    NoWithVeto,
    Abstain,
}

impl VoteOption {
    /// All answers in tab order
    pub const ALL: [Self; 4] = [Self::Yes, Self::No, Self::NoWithVeto, Self::Abstain];

    /// Wire value, also the tab key
    pub const fn as_str(&self) -> &'static str {
        match self {
            VoteOption::Yes => "Yes",
            VoteOption::No => "No",
            VoteOption::NoWithVeto => "NoWithVeto",
            VoteOption::Abstain => "Abstain",
        }
    }

    /// Human readable answer
    pub const fn label(&self) -> &'static str {
        match self {
            VoteOption::Yes => "Yes",
            VoteOption::No => "No",
            VoteOption::NoWithVeto => "No with veto",
            VoteOption::Abstain => "Abstain",
        }
    }
}

impl std::fmt::Display for VoteOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vote tally per answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCount {
    #[serde(rename = "Yes", default)]
    pub yes: u64,
    #[serde(rename = "No", default)]
    pub no: u64,
    #[serde(rename = "NoWithVeto", default)]
    pub no_with_veto: u64,
    #[serde(rename = "Abstain", default)]
    pub abstain: u64,
}

impl VoteCount {
    /// Votes cast for `option`
    pub fn get(&self, option: VoteOption) -> u64 {
        match option {
            VoteOption::Yes => self.yes,
            VoteOption::No => self.no,
            VoteOption::NoWithVeto => self.no_with_veto,
            VoteOption::Abstain => self.abstain,
        }
    }

    /// Sum of all answers, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        VoteOption::ALL
            .iter()
            .fold(0u64, |sum, option| sum.saturating_add(self.get(*option)))
    }
}

/// A tab above the votes table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTab {
    /// Query value for the `option` parameter; empty for all votes
    pub key: String,
    /// Label with count, `Yes (12)`
    pub label: String,
}

/// Tabs for the votes table: all votes first, then one per answer
///
/// # Examples
///
/// ```
/// use terra_display::votes::{vote_options, VoteCount};
///
/// let count = VoteCount { yes: 3, no: 1, no_with_veto: 0, abstain: 2 };
/// let tabs = vote_options(&count);
/// assert_eq!(tabs[0].label, "All (6)");
/// assert_eq!(tabs[3].label, "No with veto (0)");
/// ```
pub fn vote_options(count: &VoteCount) -> Vec<VoteTab> {
    std::iter::once(VoteTab {
        key: String::new(),
        label: format!("All ({})", count.total()),
    })
    .chain(VoteOption::ALL.into_iter().map(|option| VoteTab {
        key: option.as_str().to_string(),
        label: format!("{} ({})", option.label(), count.get(option)),
    }))
    .collect()
}

/// Request for one page of votes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotesQuery {
    /// Proposal id
    pub id: String,
    /// Answer to filter by; `None` for all
    pub option: Option<VoteOption>,
    /// 1-based page
    pub page: u32,
}

impl VotesQuery {
    /// First page of all votes for a proposal
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            option: None,
            page: 1,
        }
    }

    /// Endpoint path
    pub fn url(&self) -> String {
        format!("/v1/gov/proposals/{}/votes", self.id)
    }

    /// Query parameters
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "option",
                self.option.map(|o| o.as_str()).unwrap_or_default().to_string(),
            ),
            ("page", self.page.to_string()),
        ]
    }
}

/// Who cast a vote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub account_address: String,
    /// Present when the voter is a validator
    #[serde(default)]
    pub operator_address: Option<String>,
    #[serde(default)]
    pub moniker: Option<String>,
}

/// One vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteItem {
    pub voter: Voter,
    pub answer: VoteOption,
    pub txhash: String,
}

/// One page of votes as returned by the API
///
/// Counters arrive as numbers or numeric strings depending on the backend
/// version; both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotesData {
    #[serde(deserialize_with = "number_or_string", default)]
    pub total_cnt: u64,
    #[serde(deserialize_with = "number_or_string", default)]
    pub page: u64,
    #[serde(deserialize_with = "number_or_string", default)]
    pub limit: u64,
    #[serde(default)]
    pub votes: Vec<VoteItem>,
}

/// Paging state for the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_cnt: u64,
    pub page: u64,
    pub limit: u64,
}

/// Text with an optional finder link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCell {
    pub text: String,
    pub link: String,
}

/// A rendered table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRow {
    pub voter: LinkCell,
    pub answer: String,
    pub hash: LinkCell,
}

/// Column headings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteHeadings {
    pub voter: String,
    pub answer: String,
    pub hash: String,
}

impl Default for VoteHeadings {
    fn default() -> Self {
        Self {
            voter: "Voter".to_string(),
            answer: "Answer".to_string(),
            hash: "Tx".to_string(),
        }
    }
}

/// Body of the votes page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum VotesContent {
    /// Nothing to list
    Empty { message: String },
    /// One row per vote
    Table {
        headings: VoteHeadings,
        rows: Vec<VoteRow>,
    },
}

/// Rendered votes page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotesPage {
    pub title: String,
    pub pagination: Pagination,
    pub content: VotesContent,
}

/// Message shown when a proposal has no votes
pub const NO_VOTES_MESSAGE: &str = "No votes yet";

/// Voter cell: validators show their moniker and link to the validator
/// page, everyone else shows a truncated account address
pub fn voter_cell(voter: &Voter, finder: &Finder) -> LinkCell {
    match (&voter.operator_address, &voter.moniker) {
        (Some(operator), Some(moniker)) if !operator.is_empty() => LinkCell {
            text: moniker.clone(),
            link: finder.link(LinkKind::Validator, operator),
        },
        _ => LinkCell {
            text: truncate(&voter.account_address, VOTER_TRUNCATE),
            link: finder.link(LinkKind::Account, &voter.account_address),
        },
    }
}

/// Render one page of votes
///
/// # Examples
///
/// ```
/// use terra_display::votes::{render_votes, VotesContent, VotesData};
/// use terra_display::Finder;
///
/// let page = render_votes(&VotesData::default(), &Finder::default());
/// assert!(matches!(page.content, VotesContent::Empty { .. }));
/// ```
pub fn render_votes(data: &VotesData, finder: &Finder) -> VotesPage {
    let pagination = Pagination {
        total_cnt: data.total_cnt,
        page: data.page,
        limit: data.limit,
    };

    let content = if data.total_cnt == 0 {
        VotesContent::Empty {
            message: NO_VOTES_MESSAGE.to_string(),
        }
    } else {
        VotesContent::Table {
            headings: VoteHeadings::default(),
            rows: data
                .votes
                .iter()
                .map(|vote| VoteRow {
                    voter: voter_cell(&vote.voter, finder),
                    answer: vote.answer.label().to_string(),
                    hash: LinkCell {
                        text: vote.txhash.clone(),
                        link: finder.link(LinkKind::Tx, &vote.txhash),
                    },
                })
                .collect(),
        }
    };

    VotesPage {
        title: String::new(),
        pagination,
        content,
    }
}

/// Accept `12`, `"12"` or `""` (zero)
pub(crate) fn number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) if s.trim().is_empty() => Ok(0),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
