#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kinesis_battle::{Battle, BattleId, ReferenceTables};
    use kinesis_protocol::parse_battle_record;
    use serde_json::{Value, json};

    use crate::{ExtractError, ExtractorConfig, FeatureExtractor, FeatureGroup, WorkerPool};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn state(name: &str, hp: f64) -> Value {
        json!({"name": name, "hp_pct": hp, "status": "nostatus", "effects": ["noeffect"], "boosts": {}})
    }

    fn thunderbolt() -> Value {
        json!({"name": "thunderbolt", "type": "ELECTRIC", "category": "SPECIAL",
               "base_power": 95, "accuracy": 1.0, "priority": 0})
    }

    fn profile(name: &str, types: [&str; 2], stats: [f64; 6]) -> Value {
        json!({"name": name, "level": 100, "types": types,
               "base_hp": stats[0], "base_atk": stats[1], "base_def": stats[2],
               "base_spa": stats[3], "base_spd": stats[4], "base_spe": stats[5]})
    }

    /// Alpha (Electric) hits Beta (Water) for 0.4 with a super effective
    /// move, then Beta switches out to Gamma while still healthy
    fn scenario() -> Value {
        json!({
            "battle_id": 42,
            "player_won": true,
            "p1_team_details": [
                profile("Alpha", ["electric", "notype"], [60.0, 90.0, 55.0, 90.0, 80.0, 110.0]),
                profile("Delta", ["normal", "notype"], [100.0, 70.0, 65.0, 50.0, 70.0, 50.0]),
            ],
            "p2_lead_details": profile("Beta", ["water", "notype"], [80.0, 70.0, 80.0, 70.0, 80.0, 60.0]),
            "battle_timeline": [
                {"turn": 1, "p1_pokemon_state": state("Alpha", 1.0), "p2_pokemon_state": state("Beta", 0.6),
                 "p1_move_details": thunderbolt(), "p2_move_details": null},
                {"turn": 2, "p1_pokemon_state": state("Alpha", 1.0), "p2_pokemon_state": state("Gamma", 1.0),
                 "p1_move_details": null, "p2_move_details": null},
            ]
        })
    }

    fn battle(value: &Value) -> Battle {
        let record = parse_battle_record(&value.to_string()).unwrap();
        Battle::from_protocol(record).unwrap()
    }

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::from_config(ExtractorConfig::full())
    }

    #[test]
    fn test_end_to_end_scenario() {
        let record = extractor().extract(&battle(&scenario()));

        assert_eq!(record.battle_id, BattleId::Number(42));
        assert_eq!(record.outcome, Some(true));

        // one x2 hit over two turns, and it was same-type
        assert!(approx_eq(record.get("diff_x2_eff"), 0.5));
        assert!(approx_eq(record.get("diff_x4_eff"), 0.0));
        assert!(approx_eq(record.get("diff_stab"), 0.5));

        // the same Thunderbolt beats Beta's Water typing; player 2 never attacked
        assert_eq!(record.get("p2_lead_super_effective_taken"), 1.0);
        assert_eq!(record.get("p1_super_effective_taken"), 0.0);

        // only player 2 switched, voluntarily
        assert_eq!(record.get("switch_diff"), -1.0);

        // the switch resets the baseline: Gamma's full HP isn't healing
        assert!(approx_eq(record.get("p1_net_damage"), 0.4));
        assert!(approx_eq(record.get("p1_damage_ratio"), 0.4));

        assert!(approx_eq(record.get("p1_momentum_score"), 1.5));
        assert_eq!(record.get("diff_coverage_advantage"), 1.0);

        assert_eq!(record.get("diff_accuracy"), 1.0);
        assert_eq!(record.get("diff_base_power"), 95.0);
        assert!(approx_eq(record.get("diff_null_moves"), 0.5));

        assert_eq!(record.get("p1_first_ko"), 3.0);
        assert_eq!(record.get("p2_final_alive"), 2.0);
        assert!(approx_eq(record.get("p2_final_hp_sum"), 1.6));

        assert_eq!(record.get("p1_mean_hp"), 80.0);
        assert_eq!(record.get("p1_mean_spe"), 80.0);
        assert_eq!(record.get("p2_lead_def"), 80.0);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = extractor();
        let b = battle(&scenario());
        assert_eq!(extractor.extract(&b), extractor.extract(&b));
    }

    #[test]
    fn test_every_configured_column_is_emitted() {
        let extractor = extractor();
        let record = extractor.extract(&battle(&scenario()));
        let emitted: Vec<&str> = record.features.keys().copied().collect();
        assert_eq!(emitted, extractor.config().columns());

        let compact = FeatureExtractor::from_config(ExtractorConfig::compact());
        let record = compact.extract(&battle(&scenario()));
        let emitted: Vec<&str> = record.features.keys().copied().collect();
        assert_eq!(emitted, compact.config().columns());
    }

    #[test]
    fn test_empty_timeline() {
        let mut value = scenario();
        value["battle_timeline"] = json!([]);
        let record = extractor().extract(&battle(&value));

        for column in [
            "diff_x4_eff",
            "diff_x2_eff",
            "diff_x0_5_eff",
            "diff_x0_25_eff",
            "diff_stab",
            "diff_null_moves",
            "diff_boosts_score",
            "p1_net_damage",
            "p1_damage_ratio",
            "switch_diff",
            "p1_momentum_score",
            "diff_coverage_advantage",
        ] {
            assert_eq!(record.get(column), 0.0, "{column}");
        }
        assert_eq!(record.get("p1_first_ko"), 1.0);
    }

    #[test]
    fn test_forced_replacement_is_not_a_switch() {
        let mut value = scenario();
        value["battle_timeline"][0]["p2_pokemon_state"] = state("Beta", 0.0);
        let record = extractor().extract(&battle(&value));

        assert_eq!(record.get("switch_diff"), 0.0);
        assert_eq!(record.get("p2_first_ko"), 1.0);
        assert!(approx_eq(record.get("p1_net_damage"), 1.0));
    }

    #[test]
    fn test_coverage_flips_when_sides_swap() {
        let tables = Arc::new(ReferenceTables::gen1());
        let extractor = FeatureExtractor::new(tables, ExtractorConfig::full().only([FeatureGroup::Coverage]));

        // Jolteon's roster faces Golem, then the mirror image
        let forward = json!({
            "battle_id": 1,
            "p1_team_details": [profile("Jolteon", ["electric", "notype"], [0.0; 6])],
            "battle_timeline": [{"p1_pokemon_state": state("Jolteon", 1.0),
                                 "p2_pokemon_state": state("Golem", 1.0)}]
        });
        let backward = json!({
            "battle_id": 2,
            "p1_team_details": [profile("Golem", ["rock", "ground"], [0.0; 6])],
            "battle_timeline": [{"p1_pokemon_state": state("Golem", 1.0),
                                 "p2_pokemon_state": state("Jolteon", 1.0)}]
        });

        let forward = extractor.extract(&battle(&forward)).get("diff_coverage_advantage");
        let backward = extractor.extract(&battle(&backward)).get("diff_coverage_advantage");
        assert_eq!(forward, -backward);
        assert_eq!(forward, -1.0);
    }

    #[test]
    fn test_extract_lines_skips_bad_records() {
        let mut missing_timeline = scenario();
        missing_timeline["battle_id"] = json!(43);
        missing_timeline.as_object_mut().unwrap().remove("battle_timeline");

        let mut second = scenario();
        second["battle_id"] = json!("battle-44");
        second.as_object_mut().unwrap().remove("player_won");

        let input = format!(
            "{}\n\n{{not json\n{}\n{}\n",
            scenario(),
            missing_timeline,
            second
        );

        let outcome = extractor()
            .extract_lines(&input, WorkerPool::with_workers(2))
            .unwrap();

        let ids: Vec<String> = outcome
            .table
            .records()
            .iter()
            .map(|r| r.battle_id.to_string())
            .collect();
        assert_eq!(ids, vec!["42", "battle-44"]);
        assert!(outcome.table.has_outcome());

        assert_eq!(outcome.failures.len(), 2);
        assert_eq!(outcome.failures[0].line, 3);
        assert!(matches!(outcome.failures[0].error, ExtractError::Parse { .. }));
        assert_eq!(outcome.failures[1].line, 4);
        assert!(matches!(outcome.failures[1].error, ExtractError::Invalid { line: 4, .. }));
    }

    #[test]
    fn test_extract_lines_tolerates_null_fields() {
        let mut value = scenario();
        value["p1_team_details"][0]["types"] = Value::Null;
        value["p2_lead_details"]["base_spe"] = Value::Null;
        value["battle_timeline"][0]["p2_pokemon_state"]["boosts"] = Value::Null;
        value["battle_timeline"][0]["p2_pokemon_state"]["effects"] = Value::Null;
        value["battle_timeline"][1]["p1_pokemon_state"] = Value::Null;

        let outcome = extractor()
            .extract_lines(&value.to_string(), WorkerPool::default())
            .unwrap();

        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.table.len(), 1);
        let record = &outcome.table.records()[0];
        assert_eq!(record.battle_id, BattleId::Number(42));
        assert_eq!(record.get("p2_lead_spe"), 0.0);
    }

    #[test]
    fn test_extract_batch_preserves_order() {
        let battles: Vec<Battle> = (0..16)
            .map(|id| {
                let mut value = scenario();
                value["battle_id"] = json!(id);
                battle(&value)
            })
            .collect();

        let table = extractor()
            .extract_batch(&battles, WorkerPool::default())
            .unwrap();

        let ids: Vec<BattleId> = table.records().iter().map(|r| r.battle_id.clone()).collect();
        let expected: Vec<BattleId> = (0..16).map(BattleId::Number).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_extract_record_reports_invalid_battle() {
        let mut value = scenario();
        value.as_object_mut().unwrap().remove("p1_team_details");
        let record = parse_battle_record(&value.to_string()).unwrap();

        assert!(matches!(
            extractor().extract_record(record),
            Err(ExtractError::Battle(_))
        ));
    }

    #[test]
    fn test_csv_output() {
        let extractor = FeatureExtractor::from_config(
            ExtractorConfig::full().only([FeatureGroup::Switching, FeatureGroup::Damage]),
        );
        let outcome = extractor
            .extract_lines(&scenario().to_string(), WorkerPool::default())
            .unwrap();

        let mut out = Vec::new();
        outcome.table.write_csv(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("battle_id,p1_damage_ratio,p1_net_damage,switch_diff,player_won")
        );
        assert!(lines.next().is_some_and(|row| row.starts_with("42,") && row.ends_with(",-1,1")));
    }
}
