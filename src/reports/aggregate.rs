//! Category aggregation
//!
//! Groups filtered records by their exact category string. Buckets keep the
//! order in which each category was first seen.

use std::collections::HashMap;

use crate::models::ExpenseRecord;

/// What each bucket keeps beyond its running total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationMode {
    /// Keep every amount so max/min can be taken
    Extremes,
    /// Running totals only
    Sum,
}

/// One category's bucket
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAggregate {
    pub category: String,
    /// Amounts in scan order; empty in `Sum` mode
    pub amounts: Vec<f64>,
    pub total: f64,
    pub count: usize,
}

impl CategoryAggregate {
    fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            amounts: Vec::new(),
            total: 0.0,
            count: 0,
        }
    }

    /// Largest amount, if amounts were kept
    pub fn max(&self) -> Option<f64> {
        self.amounts.iter().copied().reduce(f64::max)
    }

    /// Smallest amount, if amounts were kept
    pub fn min(&self) -> Option<f64> {
        self.amounts.iter().copied().reduce(f64::min)
    }
}

/// Per-category buckets plus the grand total
#[derive(Debug, Clone)]
pub struct Aggregation {
    mode: AggregationMode,
    buckets: Vec<CategoryAggregate>,
    index: HashMap<String, usize>,
    total_spent: f64,
}

impl Aggregation {
    pub fn new(mode: AggregationMode) -> Self {
        Self {
            mode,
            buckets: Vec::new(),
            index: HashMap::new(),
            total_spent: 0.0,
        }
    }

    /// Fold one record into its category bucket
    pub fn add(&mut self, record: &ExpenseRecord) {
        let idx = match self.index.get(&record.category) {
            Some(&idx) => idx,
            None => {
                self.buckets.push(CategoryAggregate::new(&record.category));
                let idx = self.buckets.len() - 1;
                self.index.insert(record.category.clone(), idx);
                idx
            }
        };

        let bucket = &mut self.buckets[idx];
        if self.mode == AggregationMode::Extremes {
            bucket.amounts.push(record.amount);
        }
        bucket.total += record.amount;
        bucket.count += 1;
        self.total_spent += record.amount;
    }

    pub fn mode(&self) -> AggregationMode {
        self.mode
    }

    /// Buckets in first-seen order
    pub fn categories(&self) -> &[CategoryAggregate] {
        &self.buckets
    }

    pub fn get(&self, category: &str) -> Option<&CategoryAggregate> {
        self.index.get(category).map(|&idx| &self.buckets[idx])
    }

    /// Sum of every aggregated amount
    pub fn total_spent(&self) -> f64 {
        self.total_spent
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Category with the largest total; ties keep the earliest bucket
    pub fn highest(&self) -> Option<&CategoryAggregate> {
        self.buckets.iter().fold(None, |best, bucket| match best {
            Some(current) if bucket.total <= current.total => Some(current),
            _ => Some(bucket),
        })
    }

    /// Category with the smallest total; ties keep the earliest bucket
    pub fn lowest(&self) -> Option<&CategoryAggregate> {
        self.buckets.iter().fold(None, |best, bucket| match best {
            Some(current) if bucket.total >= current.total => Some(current),
            _ => Some(bucket),
        })
    }
}

/// Aggregate records in scan order
pub fn aggregate<'a, I>(records: I, mode: AggregationMode) -> Aggregation
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut aggregation = Aggregation::new(mode);
    for record in records {
        aggregation.add(record);
    }
    aggregation
}
