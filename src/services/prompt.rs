//! Instruction prompt for the academic summary.
//!
//! The wording is a fixed contract: the seven coverage aspects and the
//! 25-30% length ratio are reproduced exactly on every request.

/// Language the summary is written in.
pub const SUMMARY_LANGUAGE: &str = "Spanish";

/// Target length of the summary relative to the source document.
pub const LENGTH_RATIO: &str = "25-30%";

/// Aspects every summary must cover, in order: label and what it asks for.
pub const COVERAGE_ASPECTS: [(&str, &str); 7] = [
    (
        "Central thesis",
        "the main argument or research question and the position the author defends",
    ),
    (
        "Section-by-section analysis",
        "a detailed account of each section or chapter, in the order they appear",
    ),
    (
        "Key concepts and definitions",
        "every important term, theory or framework, explained as the author uses it",
    ),
    (
        "Methodology",
        "the methods, sources, data and analytical approach the work relies on",
    ),
    (
        "Evidence",
        "the data, examples, citations and arguments offered in support of each claim",
    ),
    (
        "Conclusions",
        "the findings, their implications and any limitations acknowledged by the author",
    ),
    (
        "Scholarly contribution",
        "how the work advances, challenges or complements existing research in its field",
    ),
];

/// Builds the full prompt for `text`. Deterministic and total; the source
/// text is appended verbatim, without truncation.
pub fn build_prompt(text: &str) -> String {
    let aspects: String = COVERAGE_ASPECTS
        .iter()
        .enumerate()
        .map(|(i, (label, detail))| format!("{}. {}: {}.\n", i + 1, label, detail))
        .collect();

    format!(
        "You are an expert academic analyst. Write an extensive and exhaustive academic summary \
         of the document below. The summary must be written in {language}.\n\
         \n\
         The summary must be approximately {ratio} of the length of the original text. \
         Do not omit relevant information and do not add content that is not in the document.\n\
         \n\
         Cover the following aspects, in this order:\n\
         {aspects}\
         \n\
         Use formal academic language, keep the author's terminology and organize the summary \
         with headings that follow the aspects above.\n\
         \n\
         DOCUMENT:\n\
         {text}",
        language = SUMMARY_LANGUAGE,
        ratio = LENGTH_RATIO,
        aspects = aspects,
        text = text,
    )
}
