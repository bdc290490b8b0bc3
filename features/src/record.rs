//! Feature rows and the CSV table they're written to

use std::collections::BTreeMap;
use std::io;

use kinesis_protocol::BattleId;

/// Column holding the battle id
pub const ID_COLUMN: &str = "battle_id";

/// Column holding the outcome, present only when some battle has one
pub const OUTCOME_COLUMN: &str = "player_won";

/// One battle's features
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub battle_id: BattleId,
    pub features: BTreeMap<&'static str, f64>,
    pub outcome: Option<bool>,
}

impl FeatureRecord {
    pub fn new(battle_id: BattleId, outcome: Option<bool>) -> Self {
        Self {
            battle_id,
            features: BTreeMap::new(),
            outcome,
        }
    }

    pub fn insert(&mut self, column: &'static str, value: f64) {
        self.features.insert(column, value);
    }

    /// Feature value, 0 if this record doesn't carry the column
    pub fn get(&self, column: &str) -> f64 {
        self.features.get(column).copied().unwrap_or(0.0)
    }
}

/// Records sharing one column set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTable {
    columns: Vec<&'static str>,
    records: Vec<FeatureRecord>,
}

impl FeatureTable {
    /// Create an empty table with the given feature columns
    pub fn new(mut columns: Vec<&'static str>) -> Self {
        columns.sort_unstable();
        columns.dedup();
        Self {
            columns,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: FeatureRecord) {
        self.records.push(record);
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any record knows its outcome (training data)
    pub fn has_outcome(&self) -> bool {
        self.records.iter().any(|r| r.outcome.is_some())
    }

    /// `battle_id`, the feature columns, then `player_won` if any record has one
    pub fn header(&self) -> Vec<&'static str> {
        let mut header = Vec::with_capacity(self.columns.len() + 2);
        header.push(ID_COLUMN);
        header.extend(self.columns.iter().copied());
        if self.has_outcome() {
            header.push(OUTCOME_COLUMN);
        }
        header
    }

    /// Write the table as CSV
    ///
    /// Outcomes are written as `1`/`0`, left empty for records without one.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv = csv::Writer::from_writer(writer);
        let with_outcome = self.has_outcome();

        csv.write_record(self.header())?;
        for record in &self.records {
            let mut row = Vec::with_capacity(self.columns.len() + 2);
            row.push(record.battle_id.to_string());
            row.extend(self.columns.iter().map(|c| record.get(c).to_string()));
            if with_outcome {
                row.push(match record.outcome {
                    Some(true) => "1".to_string(),
                    Some(false) => "0".to_string(),
                    None => String::new(),
                });
            }
            csv.write_record(&row)?;
        }
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, outcome: Option<bool>, features: &[(&'static str, f64)]) -> FeatureRecord {
        let mut record = FeatureRecord::new(BattleId::Number(id), outcome);
        for &(column, value) in features {
            record.insert(column, value);
        }
        record
    }

    fn to_csv(table: &FeatureTable) -> String {
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_csv_with_outcome() {
        let mut table = FeatureTable::new(vec!["switch_diff", "p1_net_damage"]);
        table.push(record(1, Some(true), &[("switch_diff", 2.0), ("p1_net_damage", 0.5)]));
        table.push(record(2, Some(false), &[("p1_net_damage", -0.25)]));

        assert_eq!(
            to_csv(&table),
            "battle_id,p1_net_damage,switch_diff,player_won\n\
             1,0.5,2,1\n\
             2,-0.25,0,0\n"
        );
    }

    #[test]
    fn test_csv_without_outcome() {
        let mut table = FeatureTable::new(vec!["switch_diff"]);
        table.push(record(9, None, &[("switch_diff", -1.0)]));

        assert!(!table.has_outcome());
        assert_eq!(to_csv(&table), "battle_id,switch_diff\n9,-1\n");
    }

    #[test]
    fn test_partial_outcome_leaves_blank() {
        let mut table = FeatureTable::new(vec!["switch_diff"]);
        table.push(record(1, None, &[]));
        table.push(record(2, Some(true), &[]));

        assert_eq!(
            to_csv(&table),
            "battle_id,switch_diff,player_won\n1,0,\n2,0,1\n"
        );
    }

    #[test]
    fn test_empty_table_writes_header() {
        let table = FeatureTable::new(vec!["b", "a"]);
        assert_eq!(table.columns(), &["a", "b"]);
        assert_eq!(to_csv(&table), "battle_id,a,b\n");
    }
}
