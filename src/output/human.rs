// Human-readable rendering of a ranking or a refusal

use crate::error::rank::RankError;
use crate::format::numbers::{format_count, format_ms, format_usize};
use crate::rank::{Algorithm, RankingResult};

#[derive(Debug)]
pub struct RankedBody<'a> {
    pub algorithm: Algorithm,
    pub population: usize,
    pub result: &'a RankingResult,
}

/// Summary, then the top list best-first, then (online only) cutoffs in
/// milestone order.
pub fn render_ranked(ctx: &RankedBody<'_>) -> Vec<String> {
    let selected = ctx.result.top.len();
    let mut lines = Vec::with_capacity(selected + ctx.result.cutoffs.len() + 6);
    lines.push(format!(
        "{}: top {} of {} players in {}",
        ctx.algorithm,
        format_usize(selected),
        format_usize(ctx.population),
        format_ms(ctx.result.elapsed_ms())
    ));

    if selected == 0 {
        lines.push("No players selected.".to_string());
    } else {
        lines.push(String::new());
        for (rank, player) in ctx.result.top.iter().rev().enumerate() {
            lines.push(format!(
                "{:>4}. {}  {}",
                rank + 1,
                player.name,
                format_count(player.level)
            ));
        }
    }

    if !ctx.result.cutoffs.is_empty() {
        lines.push(String::new());
        lines.push("Cutoffs (players read -> minimum level):".to_string());
        for (milestone, level) in &ctx.result.cutoffs {
            lines.push(format!(
                "  {} -> {}",
                format_usize(*milestone),
                format_count(*level)
            ));
        }
    }
    lines
}

pub fn render_refusal(error: &RankError) -> Vec<String> {
    vec![
        "Cannot rank players.".to_string(),
        format!("Reason ({}): {}.", error.code, error.code.reason()),
        format!("Detail: {}", error.message()),
    ]
}

pub fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
