//! Random forest classifier read from a JSON export of a fitted forest.
//!
//! Each tree is a flat list of nodes in pre-order with node 0 as the root.
//! A split sends a sample left when `x[feature] <= threshold`. Leaves carry
//! one weight per class; they are normalized to probabilities at load time
//! and averaged across trees at prediction time.

use std::path::Path;

use serde::Deserialize;
use standard_error::{Interpolate, StandardError};

use crate::pkg::internal::features::{FEATURE_COUNT, FeatureVector};
use crate::prelude::Result;

use super::Predictor;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn check(&self, n_features: usize, n_classes: usize) -> core::result::Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".into());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(format!("node {} splits on unknown feature {}", idx, feature));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", idx));
                    }
                    for child in [*left, *right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!("node {} points to invalid child {}", idx, child));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if value.len() != n_classes {
                        return Err(format!(
                            "leaf {} has {} weights, expected {}",
                            idx,
                            value.len(),
                            n_classes
                        ));
                    }
                    if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                        return Err(format!("leaf {} has a negative or non-finite weight", idx));
                    }
                    if value.iter().sum::<f64>() <= 0.0 {
                        return Err(format!("leaf {} has no weight", idx));
                    }
                }
            }
        }
        Ok(())
    }

    fn normalize(&mut self) {
        for node in self.nodes.iter_mut() {
            if let Node::Leaf { value } = node {
                let total: f64 = value.iter().sum();
                value.iter_mut().for_each(|w| *w /= total);
            }
        }
    }

    /// Class probabilities of the leaf `features` lands in.
    fn leaf(&self, features: &FeatureVector) -> &[f64] {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Node::Leaf { value } => return value,
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomForest {
    n_features: usize,
    classes: Vec<i64>,
    trees: Vec<Tree>,
}

impl RandomForest {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            StandardError::new("ERR-MODEL-001").interpolate_err(format!("{}: {}", path.display(), e))
        })?;
        let forest = Self::from_json(&raw)?;
        tracing::info!(
            "loaded forest from {} with {} trees over {} classes",
            path.display(),
            forest.trees.len(),
            forest.classes.len()
        );
        Ok(forest)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let mut forest: RandomForest = serde_json::from_str(raw)
            .map_err(|e| StandardError::new("ERR-MODEL-002").interpolate_err(e.to_string()))?;
        forest
            .check()
            .map_err(|e| StandardError::new("ERR-MODEL-003").interpolate_err(e))?;
        forest.trees.iter_mut().for_each(Tree::normalize);
        Ok(forest)
    }

    fn check(&self) -> core::result::Result<(), String> {
        if self.n_features != FEATURE_COUNT {
            return Err(format!(
                "forest expects {} features, service provides {}",
                self.n_features, FEATURE_COUNT
            ));
        }
        if self.classes.is_empty() {
            return Err("forest declares no classes".into());
        }
        if self.trees.is_empty() {
            return Err("forest has no trees".into());
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.check(self.n_features, self.classes.len())
                .map_err(|e| format!("tree {}: {}", idx, e))?;
        }
        Ok(())
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    /// Mean class probabilities across all trees.
    pub fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        let mut proba = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (acc, p) in proba.iter_mut().zip(tree.leaf(features)) {
                *acc += p;
            }
        }
        let n = self.trees.len() as f64;
        proba.iter_mut().for_each(|p| *p /= n);
        proba
    }
}

impl Predictor for RandomForest {
    fn predict(&self, features: &FeatureVector) -> Result<i64> {
        let proba = self.predict_proba(features);
        // first maximum wins, so ties go to the lower class index
        let mut best = 0;
        for (idx, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = idx;
            }
        }
        self.classes.get(best).copied().ok_or_else(|| {
            StandardError::new("ERR-PREDICT-001").interpolate_err(format!("no class at index {}", best))
        })
    }
}
