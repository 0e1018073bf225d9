use crate::LabelTable;
use cambio_infer::ScoreVector;
use std::fmt;

/// Outcome of a successful classification run.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationResult {
    Resolved {
        index: usize,
        label: String,
        score: f32,
    },
    /// The winning index has no label, or no score could win.
    Unresolved,
}

impl ClassificationResult {
    pub fn label(&self) -> Option<&str> {
        match self {
            ClassificationResult::Resolved { label, .. } => Some(label),
            ClassificationResult::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ClassificationResult::Resolved { .. })
    }

    /// Text to show or speak, with `unknown` standing in for `Unresolved`.
    pub fn display_text<'a>(&'a self, unknown: &'a str) -> &'a str {
        self.label().unwrap_or(unknown)
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationResult::Resolved { label, score, .. } => {
                write!(f, "{label} ({score:.3})")
            }
            ClassificationResult::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// Index of the highest score. Ties go to the first index; NaN never wins.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

/// Map scores to a label. Never fails: an index outside the table is `Unresolved`.
pub fn resolve(scores: &ScoreVector, labels: &LabelTable) -> ClassificationResult {
    let Some(index) = argmax(scores.as_slice()) else {
        return ClassificationResult::Unresolved;
    };
    match labels.get(index) {
        Some(label) => ClassificationResult::Resolved {
            index,
            label: label.to_string(),
            score: scores.as_slice()[index],
        },
        None => {
            log::warn!(
                "winning index {index} is outside the label table ({} labels)",
                labels.len()
            );
            ClassificationResult::Unresolved
        }
    }
}
