#[cfg(test)]
mod tests {
    use crate::scoring::tests::common::{create_test_snapshot, protect_move, scorer_with_rolls, TestPokemonBuilder};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::PokemonType;

    fn score_for(ability: Option<&str>, counter: u8) -> f32 {
        let mut builder = TestPokemonBuilder::new("Gliscor", vec![PokemonType::Ground, PokemonType::Flying])
            .with_protect_counter(counter);
        if let Some(ability) = ability {
            builder = builder.with_ability(ability);
        }
        let theirs = TestPokemonBuilder::new("Tyranitar", vec![PokemonType::Rock, PokemonType::Dark]).build();
        let snapshot = create_test_snapshot("battle-protect", builder.build(), theirs);

        scorer_with_rolls(vec![50]).score_move(&snapshot, &protect_move())
    }

    #[rstest]
    #[case(Some("Poison Heal"))]
    #[case(Some("Pressure"))]
    #[case(None)]
    fn test_protect_zero_after_two_in_a_row(#[case] ability: Option<&str>) {
        assert_eq!(score_for(ability, 2), 0.0);
        assert_eq!(score_for(ability, 3), 0.0);
    }

    #[rstest]
    #[case("Poison Heal")]
    #[case("Rain Dish")]
    #[case("Ice Body")]
    #[case("Dry Skin")]
    fn test_healing_abilities_get_synergy_value(#[case] ability: &str) {
        assert_eq!(score_for(Some(ability), 0), 200.0);
        assert_eq!(score_for(Some(ability), 1), 100.0);
    }

    #[test]
    fn test_scouting_value_only_on_first_use() {
        assert_eq!(score_for(Some("Sand Veil"), 0), 50.0);
        assert_eq!(score_for(Some("Sand Veil"), 1), 0.0);
        assert_eq!(score_for(None, 0), 50.0);
    }
}
