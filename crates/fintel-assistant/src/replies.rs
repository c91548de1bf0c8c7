//! Canned replies and the keyword rules that pick them.

pub const GREETING: &str = "Hi! I'm your franchise intelligence assistant. I can help you with \
questions about franchises, industry insights, and comparisons. What would you like to know?";

pub const ROI: &str = "Based on industry data, food franchises typically see ROI between 15-25% \
annually, with established brands like McDonald's and Subway performing above average. Factors \
affecting ROI include location, local market conditions, and operational efficiency.";

pub const COMPARISON: &str = "When comparing F45 and Snap Fitness, F45 requires higher initial \
investment ($150k-$300k vs $80k-$200k) but offers higher profit margins due to premium \
positioning. Snap Fitness has lower overhead with 24/7 automated model.";

pub const CHILDCARE: &str = "The childcare franchise industry shows strong growth potential with \
5-7% annual growth expected through 2028. Key drivers include dual-income households and \
increased focus on early childhood education.";

pub const FALLBACK: &str = "That's a great question! While I don't have specific data on that \
topic right now, I recommend checking our franchise database for detailed information. You can \
also compare multiple franchises using our comparison tool.";

/// Keyword rules, checked in order. The first rule with any keyword
/// contained in the lower-cased question wins.
const RULES: &[(&[&str], &str)] = &[
    (&["roi", "return"], ROI),
    (&["compare", "f45", "snap"], COMPARISON),
    (&["childcare", "outlook"], CHILDCARE),
];

/// Pick the reply for a question.
#[must_use]
pub fn respond(question: &str) -> &'static str {
    let lower = question.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(FALLBACK, |&(_, reply)| reply)
}
