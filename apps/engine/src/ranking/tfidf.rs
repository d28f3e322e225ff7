//! A small tf-idf vector space over one job description and a set of
//! candidate texts. Smoothed idf, raw term counts, L2-normalized rows;
//! cosine similarity reduces to a dot product.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MAX_VOCABULARY;

// Tokens are runs of 2+ word characters, lower-cased.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Cosine similarity between the job text and every candidate text, in
/// [0, 1]. Returns `None` when the vector space cannot be built (empty
/// vocabulary, or a non-finite value crept in); callers fall back to
/// token overlap.
pub(crate) fn similarities(job_text: &str, candidate_texts: &[String]) -> Option<Vec<f64>> {
    let mut documents: Vec<Vec<String>> = Vec::with_capacity(candidate_texts.len() + 1);
    documents.push(tokenize(job_text));
    for text in candidate_texts {
        documents.push(tokenize(text));
    }

    let vocabulary = build_vocabulary(&documents, MAX_VOCABULARY);
    if vocabulary.is_empty() {
        return None;
    }

    let index: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, term)| (term.as_str(), i))
        .collect();

    let mut document_frequency = vec![0usize; vocabulary.len()];
    for doc in &documents {
        let seen: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in seen {
            if let Some(&i) = index.get(term) {
                document_frequency[i] += 1;
            }
        }
    }

    let n_docs = documents.len() as f64;
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    let vectors: Vec<Vec<f64>> = documents
        .iter()
        .map(|doc| {
            let mut row = vec![0.0; vocabulary.len()];
            for token in doc {
                if let Some(&i) = index.get(token.as_str()) {
                    row[i] += 1.0;
                }
            }
            for (value, weight) in row.iter_mut().zip(&idf) {
                *value *= weight;
            }
            l2_normalize(&mut row);
            row
        })
        .collect();

    let job_vector = &vectors[0];
    let sims: Vec<f64> = vectors[1..]
        .iter()
        .map(|candidate| dot(job_vector, candidate))
        .collect();

    if sims.iter().any(|s| !s.is_finite()) {
        return None;
    }
    Some(sims)
}

/// The `cap` most frequent corpus terms; ties break lexicographically.
fn build_vocabulary(documents: &[Vec<String>], cap: usize) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for doc in documents {
        for token in doc {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let mut terms: Vec<(&str, usize)> = counts.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.truncate(cap);
    terms.into_iter().map(|(term, _)| term.to_string()).collect()
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in row.iter_mut() {
            *value /= norm;
        }
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
