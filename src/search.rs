use std::collections::{HashMap, HashSet};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

// Minimum combined similarity before a title is worth suggesting
pub const MATCH_THRESHOLD: f64 = 0.3;

/// TF-IDF index over task titles, used to resolve titles typed at the CLI.
/// The title set is fixed for the life of the process, so the index is
/// built once and never updated.
#[derive(Debug, Clone)]
pub struct TitleIndex {
    vocabulary: HashMap<String, usize>,
    document_frequencies: Vec<f64>,
    vectors: Vec<HashMap<usize, f64>>,
    titles: Vec<String>,
    total_docs: usize,
}

#[derive(Debug)]
pub struct TitleMatch {
    pub exact: bool,
    pub suggestion: Option<String>,
    pub score: Option<f64>,
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|s| s.chars().filter(|c| c.is_alphanumeric() || *c == '_').collect())
        .filter(|s: &String| !s.is_empty())
        .collect()
}

fn term_frequencies(tokens: &[String], vocabulary: &HashMap<String, usize>) -> HashMap<usize, f64> {
    let mut tf = HashMap::new();
    let doc_length = tokens.len() as f64;

    for token in tokens {
        if let Some(&word_id) = vocabulary.get(token) {
            *tf.entry(word_id).or_insert(0.0) += 1.0;
        }
    }

    for count in tf.values_mut() {
        *count /= doc_length;
    }

    tf
}

fn cosine_similarity(a: &HashMap<usize, f64>, b: &HashMap<usize, f64>) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (&key, &value) in a {
        dot += value * b.get(&key).unwrap_or(&0.0);
        norm_a += value * value;
    }
    for &value in b.values() {
        norm_b += value * value;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

impl TitleIndex {
    pub fn build(titles: Vec<String>) -> TitleIndex {
        let total_docs = titles.len();

        let mut vocabulary = HashMap::new();
        let mut word_doc_count: HashMap<String, usize> = HashMap::new();

        for title in &titles {
            let mut unique_tokens = HashSet::new();
            for token in tokenize(title) {
                if !vocabulary.contains_key(&token) {
                    vocabulary.insert(token.clone(), vocabulary.len());
                }
                unique_tokens.insert(token);
            }
            for token in unique_tokens {
                *word_doc_count.entry(token).or_insert(0) += 1;
            }
        }

        let mut document_frequencies = vec![0.0; vocabulary.len()];
        for (word, &word_id) in &vocabulary {
            document_frequencies[word_id] = *word_doc_count.get(word).unwrap_or(&0) as f64;
        }

        let mut vectors = Vec::new();
        for title in &titles {
            let tf = term_frequencies(&tokenize(title), &vocabulary);
            let mut vector = HashMap::new();
            for (&word_id, &tf_value) in &tf {
                let df = document_frequencies[word_id];
                let idf = (total_docs as f64 / (df + 1.0)).ln(); // +1 for smoothing
                vector.insert(word_id, tf_value * idf);
            }
            vectors.push(vector);
        }

        TitleIndex {
            vocabulary,
            document_frequencies,
            vectors,
            titles,
            total_docs,
        }
    }

    /// Exact match first, then a combined fuzzy + TF-IDF score against
    /// every title, returning the best candidate above the threshold.
    pub fn find_match(&self, input: &str) -> TitleMatch {
        if self.titles.iter().any(|t| t == input) {
            return TitleMatch {
                exact: true,
                suggestion: Some(input.to_string()),
                score: Some(1.0),
            };
        }

        let matcher = SkimMatcherV2::default();
        // A full self-match is the ceiling the fuzzy score is normalized by
        let perfect = matcher
            .fuzzy_match(input, input)
            .unwrap_or(1)
            .max(1) as f64;

        let input_tf = term_frequencies(&tokenize(input), &self.vocabulary);
        let mut input_vector = HashMap::new();
        for (&word_id, &tf_value) in &input_tf {
            let df = self.document_frequencies[word_id];
            let idf = (self.total_docs as f64 / (df + 1.0)).ln();
            input_vector.insert(word_id, tf_value * idf);
        }

        let mut candidates = Vec::new();
        for (position, title) in self.titles.iter().enumerate() {
            let fuzzy_score = matcher
                .fuzzy_match(title, input)
                .map(|score| (score as f64 / perfect).min(1.0))
                .unwrap_or(0.0);
            let tfidf_score = cosine_similarity(&input_vector, &self.vectors[position]);

            let combined = (fuzzy_score * 0.7) + (tfidf_score * 0.3);
            if combined >= MATCH_THRESHOLD {
                candidates.push((title.clone(), combined));
            }
        }

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

        TitleMatch {
            exact: false,
            suggestion: candidates.first().map(|(title, _)| title.clone()),
            score: candidates.first().map(|(_, score)| *score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> TitleIndex {
        TitleIndex::build(vec![
            "Postagem sobre sustentabilidade".to_string(),
            "Vídeo explicativo sobre app".to_string(),
            "Carrossel de produtos novos".to_string(),
            "Campanha de desconto de verão".to_string(),
        ])
    }

    #[test]
    fn exact_title_short_circuits() {
        let found = index().find_match("Vídeo explicativo sobre app");
        assert!(found.exact);
        assert_eq!(found.suggestion.as_deref(), Some("Vídeo explicativo sobre app"));
    }

    #[test]
    fn partial_input_suggests_the_closest_title() {
        let found = index().find_match("vídeo explicativo");
        assert!(!found.exact);
        assert_eq!(found.suggestion.as_deref(), Some("Vídeo explicativo sobre app"));
        assert!(found.score.unwrap_or(0.0) >= MATCH_THRESHOLD);
    }

    #[test]
    fn shared_words_rank_by_overlap() {
        let found = index().find_match("campanha desconto");
        assert_eq!(found.suggestion.as_deref(), Some("Campanha de desconto de verão"));
    }

    #[test]
    fn unrelated_input_yields_nothing() {
        let found = index().find_match("zzzz qqqq xxxx");
        assert!(!found.exact);
        assert!(found.suggestion.is_none());
    }

    #[test]
    fn tokenize_strips_punctuation_and_case() {
        assert_eq!(tokenize("Olá, Mundo_2!"), vec!["olá", "mundo_2"]);
    }
}
