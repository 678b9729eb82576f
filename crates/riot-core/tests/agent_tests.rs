// Rust guideline compliant 2026-02-06

//! Unit tests for fan agent state and movement rules.

use rand::rngs::StdRng;
use rand::SeedableRng;
use riot_core::{AgentState, Cell, ModelParams, Movement, RiotModel, Team};

/// Builds an empty open-map model where injuries never happen.
fn quiet_model(width: usize, height: usize) -> RiotModel {
    let params = ModelParams {
        max_injury_probability: 0.0,
        ..ModelParams::default()
    };
    model_with(width, height, params)
}

fn model_with(width: usize, height: usize, params: ModelParams) -> RiotModel {
    RiotModel::new(
        width,
        height,
        Cell::new(0, 0),
        Cell::new(width - 1, 0),
        None,
        params,
        1,
    )
    .expect("Failed to build model")
}

fn decide_state(model: &RiotModel, id: u64, seed: u64) -> Option<AgentState> {
    let agent = *model.agent(id).expect("agent exists");
    agent.decide_state(&model.view(), &mut StdRng::seed_from_u64(seed))
}

fn decide_move(model: &RiotModel, id: u64, seed: u64) -> Movement {
    let agent = *model.agent(id).expect("agent exists");
    agent.decide_move(&model.view(), &mut StdRng::seed_from_u64(seed))
}

#[test]
fn test_bystander_joins_when_own_rioters_dominate() {
    let mut model = quiet_model(5, 5);
    let fan = model
        .add_agent(Cell::new(2, 2), Team::Home, AgentState::Bystander)
        .unwrap();
    model
        .add_agent(Cell::new(2, 3), Team::Home, AgentState::Rioter)
        .unwrap();

    assert_eq!(decide_state(&model, fan, 0), Some(AgentState::Rioter));
}

#[test]
fn test_bystander_stays_calm_on_tie() {
    let mut model = quiet_model(5, 5);
    let fan = model
        .add_agent(Cell::new(2, 2), Team::Home, AgentState::Bystander)
        .unwrap();
    model
        .add_agent(Cell::new(2, 3), Team::Home, AgentState::Rioter)
        .unwrap();
    model
        .add_agent(Cell::new(1, 1), Team::Away, AgentState::Rioter)
        .unwrap();

    assert_eq!(decide_state(&model, fan, 0), None);
}

#[test]
fn test_rioters_outside_neighbourhood_are_ignored() {
    let mut model = quiet_model(7, 7);
    let fan = model
        .add_agent(Cell::new(1, 1), Team::Away, AgentState::Bystander)
        .unwrap();
    model
        .add_agent(Cell::new(5, 5), Team::Away, AgentState::Rioter)
        .unwrap();

    assert_eq!(decide_state(&model, fan, 0), None);
}

#[test]
fn test_lonely_rioter_calms_down() {
    let mut model = quiet_model(5, 5);
    let rioter = model
        .add_agent(Cell::new(2, 2), Team::Home, AgentState::Rioter)
        .unwrap();

    assert_eq!(decide_state(&model, rioter, 0), Some(AgentState::Bystander));
}

#[test]
fn test_rioter_with_company_keeps_rioting() {
    let mut model = quiet_model(5, 5);
    let rioter = model
        .add_agent(Cell::new(2, 2), Team::Home, AgentState::Rioter)
        .unwrap();
    model
        .add_agent(Cell::new(3, 3), Team::Away, AgentState::Rioter)
        .unwrap();

    assert_eq!(decide_state(&model, rioter, 0), None);
}

#[test]
fn test_injured_agent_is_inert() {
    let mut model = quiet_model(5, 5);
    let injured = model
        .add_agent(Cell::new(2, 2), Team::Home, AgentState::Injured)
        .unwrap();
    model
        .add_agent(Cell::new(2, 3), Team::Home, AgentState::Rioter)
        .unwrap();

    for seed in 0..10 {
        assert_eq!(decide_state(&model, injured, seed), None);
        assert_eq!(decide_move(&model, injured, seed), Movement::Stay);
    }
}

#[test]
fn test_surrounded_rioter_is_always_injured() {
    let params = ModelParams {
        max_agents_per_cell: 1,
        injury_min_agents: 0,
        max_injury_probability: 1.0,
        ..ModelParams::default()
    };
    let mut model = model_with(3, 3, params);
    let mut center = 0;
    for col in 0..3 {
        for row in 0..3 {
            let id = model
                .add_agent(Cell::new(col, row), Team::Home, AgentState::Rioter)
                .unwrap();
            if (col, row) == (1, 1) {
                center = id;
            }
        }
    }

    let agent = *model.agent(center).unwrap();
    let cells = model.view().walkable_neighborhood(agent.pos);
    assert!(agent.can_be_injured(&model.view(), &cells));
    assert!((agent.injury_probability(&model.view(), &cells) - 1.0).abs() < 1e-12);
    for seed in 0..10 {
        assert_eq!(decide_state(&model, center, seed), Some(AgentState::Injured));
    }
}

#[test]
fn test_injury_requires_crowded_cell() {
    let mut model = model_with(5, 5, ModelParams::default());
    let fan = model
        .add_agent(Cell::new(2, 2), Team::Home, AgentState::Bystander)
        .unwrap();
    model
        .add_agent(Cell::new(2, 3), Team::Away, AgentState::Rioter)
        .unwrap();

    let agent = *model.agent(fan).unwrap();
    let cells = model.view().walkable_neighborhood(agent.pos);
    assert!(!agent.can_be_injured(&model.view(), &cells));

    let expected = 1.0 / 45.0 * 0.3;
    assert!((agent.injury_probability(&model.view(), &cells) - expected).abs() < 1e-12);
}

#[test]
fn test_bystander_on_bottom_row_leaves() {
    let mut model = quiet_model(3, 3);
    let fan = model
        .add_agent(Cell::new(1, 2), Team::Away, AgentState::Bystander)
        .unwrap();

    assert_eq!(decide_move(&model, fan, 0), Movement::Leave);
}

#[test]
fn test_bystander_avoids_rioters_below() {
    let mut model = quiet_model(3, 5);
    let fan = model
        .add_agent(Cell::new(1, 1), Team::Home, AgentState::Bystander)
        .unwrap();
    model
        .add_agent(Cell::new(0, 2), Team::Away, AgentState::Rioter)
        .unwrap();
    model
        .add_agent(Cell::new(1, 2), Team::Home, AgentState::Rioter)
        .unwrap();

    for seed in 0..20 {
        assert_eq!(
            decide_move(&model, fan, seed),
            Movement::MoveTo(Cell::new(2, 2))
        );
    }
}

#[test]
fn test_bystander_accepts_own_rioters_as_last_resort() {
    let mut model = quiet_model(1, 4);
    let fan = model
        .add_agent(Cell::new(0, 1), Team::Home, AgentState::Bystander)
        .unwrap();
    for row in 0..3 {
        model
            .add_agent(Cell::new(0, row), Team::Home, AgentState::Rioter)
            .unwrap();
    }

    assert_eq!(
        decide_move(&model, fan, 0),
        Movement::MoveTo(Cell::new(0, 2))
    );
}

#[test]
fn test_bystander_hemmed_in_by_opponents_stays() {
    let mut model = quiet_model(1, 4);
    let fan = model
        .add_agent(Cell::new(0, 1), Team::Home, AgentState::Bystander)
        .unwrap();
    for row in 0..3 {
        model
            .add_agent(Cell::new(0, row), Team::Away, AgentState::Rioter)
            .unwrap();
    }

    assert_eq!(decide_move(&model, fan, 0), Movement::Stay);
}

#[test]
fn test_outnumbered_rioter_regroups() {
    let mut model = quiet_model(3, 3);
    let rioter = model
        .add_agent(Cell::new(1, 1), Team::Home, AgentState::Rioter)
        .unwrap();
    model
        .add_agent(Cell::new(2, 2), Team::Home, AgentState::Rioter)
        .unwrap();
    for row in 0..3 {
        model
            .add_agent(Cell::new(0, row), Team::Away, AgentState::Rioter)
            .unwrap();
    }

    for seed in 0..20 {
        match decide_move(&model, rioter, seed) {
            Movement::MoveTo(target) => {
                assert!(target == Cell::new(1, 1) || target == Cell::new(2, 2));
            }
            other => panic!("expected a move, got {:?}", other),
        }
    }
}

#[test]
fn test_dominant_rioter_avoids_opposing_cells() {
    let mut model = quiet_model(3, 3);
    let rioter = model
        .add_agent(Cell::new(1, 1), Team::Home, AgentState::Rioter)
        .unwrap();
    model
        .add_agent(Cell::new(2, 2), Team::Home, AgentState::Rioter)
        .unwrap();
    model
        .add_agent(Cell::new(0, 0), Team::Away, AgentState::Rioter)
        .unwrap();

    for seed in 0..20 {
        match decide_move(&model, rioter, seed) {
            Movement::MoveTo(target) => assert_ne!(target, Cell::new(0, 0)),
            other => panic!("expected a move, got {:?}", other),
        }
    }
}

#[test]
fn test_full_neighbourhood_means_stay() {
    let params = ModelParams {
        max_agents_per_cell: 1,
        max_injury_probability: 0.0,
        ..ModelParams::default()
    };
    let mut model = model_with(3, 3, params);
    let mut center = 0;
    for col in 0..3 {
        for row in 0..3 {
            let id = model
                .add_agent(Cell::new(col, row), Team::Away, AgentState::Bystander)
                .unwrap();
            if (col, row) == (1, 1) {
                center = id;
            }
        }
    }

    assert_eq!(decide_move(&model, center, 0), Movement::Stay);
}

#[test]
fn test_bystander_on_full_bottom_row_cannot_leave() {
    let params = ModelParams {
        max_agents_per_cell: 1,
        max_injury_probability: 0.0,
        ..ModelParams::default()
    };
    let mut model = model_with(3, 2, params);
    let mut exit_fan = 0;
    for col in 0..3 {
        for row in 0..2 {
            let id = model
                .add_agent(Cell::new(col, row), Team::Home, AgentState::Bystander)
                .unwrap();
            if (col, row) == (1, 1) {
                exit_fan = id;
            }
        }
    }

    assert_eq!(decide_move(&model, exit_fan, 0), Movement::Stay);

    model.step();
    assert_eq!(model.left(Team::Home), 0);
    assert_eq!(model.agent_count(), 6);
    assert_eq!(model.agent(exit_fan).unwrap().pos, Cell::new(1, 1));
}

#[test]
fn test_spread_only_moves_down() {
    let mut model = quiet_model(3, 3);
    let fan = model
        .add_agent(Cell::new(1, 0), Team::Home, AgentState::Bystander)
        .unwrap();

    for seed in 0..20 {
        let agent = *model.agent(fan).unwrap();
        let target = agent
            .decide_spread(&model.view(), &mut StdRng::seed_from_u64(seed))
            .expect("a free cell below");
        assert_eq!(target.row, 1);
    }

    let bottom = model
        .add_agent(Cell::new(1, 2), Team::Home, AgentState::Bystander)
        .unwrap();
    let agent = *model.agent(bottom).unwrap();
    assert!(agent
        .decide_spread(&model.view(), &mut StdRng::seed_from_u64(0))
        .is_none());
}

#[test]
fn test_buildings_are_never_targets() {
    let map = riot_core::CityMap::new(9, 20, 1, 3, 2).unwrap();
    let mut model = RiotModel::new(
        9,
        20,
        Cell::new(0, 0),
        Cell::new(8, 0),
        Some(map),
        ModelParams {
            max_injury_probability: 0.0,
            ..ModelParams::default()
        },
        1,
    )
    .unwrap();
    let fan = model
        .add_agent(Cell::new(3, 10), Team::Home, AgentState::Bystander)
        .unwrap();

    for seed in 0..20 {
        match decide_move(&model, fan, seed) {
            Movement::MoveTo(target) => assert!(model.city_map().is_walkable(target)),
            other => panic!("expected a move, got {:?}", other),
        }
    }
}
