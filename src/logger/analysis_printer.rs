use std::fmt::Write as _;
use terminal_size::{terminal_size, Width};
use crate::enums::analysis_state::AnalysisState;
use crate::enums::developer_state::DeveloperState;
use crate::structs::analyzed_issue::AnalyzedIssue;
use crate::structs::developer_info::DeveloperInfo;
use crate::structs::history_view::HistoryView;
use crate::structs::orchestrator_state::OrchestratorState;

const MIN_RULE_WIDTH: usize = 20;
const MAX_RULE_WIDTH: usize = 72;

/// Renders orchestrator state as terminal text. Holds no state of its own.
pub struct AnalysisPrinter {}

impl AnalysisPrinter {

    fn rule() -> String {
        let width = terminal_size()
            .map(|(Width(w), _)| usize::from(w))
            .unwrap_or(MAX_RULE_WIDTH)
            .clamp(MIN_RULE_WIDTH, MAX_RULE_WIDTH);
        "━".repeat(width)
    }

    /// Current result, developer panel and errors.
    pub fn render_state(state: &OrchestratorState) -> String {
        let mut out = String::new();

        match state.analysis_state {
            AnalysisState::Idle => {}
            AnalysisState::Analyzing => out.push_str("⏳ Analyzing...\n"),
            AnalysisState::Succeeded => out.push_str("✅ Analysis complete ✔\n"),
            AnalysisState::Failed => {
                if let Some(error) = &state.analysis_error {
                    let _ = writeln!(out, "❌ {}", error.message());
                }
            }
        }

        if let Some(current) = &state.current {
            out.push_str(&Self::render_result(current));
        }

        match state.developer_state {
            DeveloperState::Hidden => {}
            DeveloperState::Loading => out.push_str("\n⏳ Loading developer info...\n"),
            DeveloperState::Shown => {
                if let Some(info) = &state.developer_info {
                    out.push_str(&Self::render_developer_info(info));
                }
            }
            DeveloperState::Failed => {
                if let Some(error) = &state.developer_error {
                    let _ = writeln!(out, "\n❌ Developer info: {}", error.message());
                }
            }
        }

        out
    }

    /// Result card.
    pub fn render_result(analyzed: &AnalyzedIssue) -> String {
        let result = &analyzed.result;
        let mut out = String::new();

        let _ = writeln!(out, "\n🔍 ANALYSIS RESULT: {}", analyzed.request.label());
        let _ = writeln!(out, "{}", Self::rule());
        let _ = writeln!(out, "📝 Summary:          {}", result.summary);
        let _ = writeln!(out, "🏷️ Type:             {}", result.issue_type);
        let _ = writeln!(out, "🎯 Priority:         {}", result.priority_score);
        if result.suggested_labels.is_empty() {
            let _ = writeln!(out, "🔖 Suggested labels: (none)");
        } else {
            let _ = writeln!(out, "🔖 Suggested labels: {}", result.suggested_labels.join(", "));
        }
        let _ = writeln!(out, "💥 Potential impact: {}", result.potential_impact);
        let _ = writeln!(out, "{}", Self::rule());

        out
    }

    /// Developer panel.
    pub fn render_developer_info(info: &DeveloperInfo) -> String {
        let metadata = &info.metadata;
        let mut out = String::new();
        let unknown = "-";

        let _ = writeln!(out, "\n🧑‍💻 DEVELOPER INFO");
        let _ = writeln!(out, "{}", Self::rule());
        let _ = writeln!(out, "  State:    {}", metadata.state.as_deref().unwrap_or(unknown));
        let _ = writeln!(out, "  Author:   {}", metadata.author.as_deref().unwrap_or(unknown));
        let _ = writeln!(out, "  Comments: {}", metadata.comments.map_or_else(|| unknown.to_string(), |c| c.to_string()));
        let _ = writeln!(out, "  Created:  {}", metadata.created_at.as_deref().unwrap_or(unknown));
        let _ = writeln!(out, "  Updated:  {}", metadata.updated_at.as_deref().unwrap_or(unknown));
        if !metadata.labels.is_empty() {
            let _ = writeln!(out, "  Labels:   {}", metadata.labels.join(", "));
        }

        if let Some(url) = metadata.html_url.as_deref().filter(|u| !u.is_empty()) {
            let _ = writeln!(out, "  🔗 Issue:       {}", url);
        }
        if let Some(url) = metadata.repo_html_url.as_deref().filter(|u| !u.is_empty()) {
            let _ = writeln!(out, "  🔗 Repository:  {}", url);
        }
        if let Some(url) = metadata.repo_issues_url() {
            let _ = writeln!(out, "  🔗 All issues:  {}", url);
        }

        if info.top_comments.is_empty() {
            let _ = writeln!(out, "\n💬 No substantive comments");
        } else {
            let _ = writeln!(out, "\n💬 Top comments:");
            for (i, comment) in info.top_comments.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, comment.replace('\n', "\n     "));
            }
        }
        let _ = writeln!(out, "{}", Self::rule());

        out
    }

    /// History list with total count.
    pub fn render_history(history: &HistoryView) -> String {
        let mut out = String::new();

        if history.is_empty() {
            out.push_str("📚 No analyses yet\n");
            return out;
        }

        let _ = writeln!(out, "📚 Recent analyses ({} total):", history.count);
        for entry in &history.recent {
            let _ = writeln!(out, "  • {} #{}", entry.repo, entry.issue_number);
        }

        out
    }

    /// Prints [`render_state`](Self::render_state).
    pub fn print_state(state: &OrchestratorState) {
        print!("{}", Self::render_state(state));
    }

    /// Prints [`render_history`](Self::render_history).
    pub fn print_history(history: &HistoryView) {
        print!("{}", Self::render_history(history));
    }
}
