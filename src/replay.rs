use agent::{BasicMove, BodyActions, FieldPoint, MoveDecision, ServerParams, WorldSnapshot};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

/// Sequence of world snapshots seen by one agent, with the league settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub server: ServerParams,
    pub cycles: Vec<WorldSnapshot>,
}

impl Scenario {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(content)?;

        if scenario.cycles.is_empty() {
            return Err(ScenarioError::Empty);
        }

        Ok(scenario)
    }

    /// Runs the policy over every cycle with a single long-lived instance.
    pub fn replay(&self) -> Vec<CycleOutcome> {
        let mut policy = BasicMove::new(self.server.clone());
        let mut body = ReplayBody::default();

        self.cycles
            .iter()
            .map(|world| {
                let decision = policy.execute(world, &mut body);

                info!("cycle {} [{}]: {}", world.cycle, world.game_mode, decision);

                CycleOutcome {
                    cycle: world.cycle,
                    decision,
                    command: body.take_command(),
                    recovering: policy.is_recovering(),
                }
            })
            .collect()
    }
}

#[derive(Debug)]
pub enum ScenarioError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Empty,
}

impl Display for ScenarioError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ScenarioError::Io(err) => write!(f, "IO error: {}", err),
            ScenarioError::Json(err) => write!(f, "JSON error: {}", err),
            ScenarioError::Empty => write!(f, "scenario has no cycles"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Io(err) => Some(err),
            ScenarioError::Json(err) => Some(err),
            ScenarioError::Empty => None,
        }
    }
}

impl From<std::io::Error> for ScenarioError {
    fn from(err: std::io::Error) -> Self {
        ScenarioError::Io(err)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(err: serde_json::Error) -> Self {
        ScenarioError::Json(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleOutcome {
    pub cycle: u32,
    pub decision: MoveDecision,
    pub command: Option<BodyCommand>,
    pub recovering: bool,
}

/// Command sent to the server by the replay body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyCommand {
    Tackle { probability: f32 },
    Intercept { ball: FieldPoint },
    Dash { target: FieldPoint, power: f32 },
    TurnToBall { ball: FieldPoint },
}

/// Stand-in for the real locomotion skills: decides from the snapshot alone
/// and remembers the command it would have sent.
#[derive(Debug, Default)]
pub struct ReplayBody {
    command: Option<BodyCommand>,
}

impl ReplayBody {
    pub fn take_command(&mut self) -> Option<BodyCommand> {
        self.command.take()
    }
}

impl BodyActions for ReplayBody {
    fn tackle(&mut self, world: &WorldSnapshot, min_probability: f32, body_angle_threshold: f32) -> bool {
        let probability = world.me.tackle_probability;
        if probability < min_probability {
            return false;
        }

        // Body turned too far from the opponent goal
        if world.me.normalized_body_angle().abs() > body_angle_threshold {
            debug!("{}: tackle skipped, body angle {:.1}", world.cycle, world.me.body_angle);
            return false;
        }

        self.command = Some(BodyCommand::Tackle { probability });
        true
    }

    fn intercept(&mut self, world: &WorldSnapshot) -> bool {
        self.command = Some(BodyCommand::Intercept {
            ball: world.ball.position,
        });
        true
    }

    fn go_to_point(&mut self, world: &WorldSnapshot, target: FieldPoint, dist_thr: f32, dash_power: f32) -> bool {
        let distance = (target - world.me.position).norm();

        // Already there, nothing to do
        if distance < dist_thr {
            debug!("{}: arrived, {:.2} from target", world.cycle, distance);
            return false;
        }

        self.command = Some(BodyCommand::Dash {
            target,
            power: dash_power,
        });
        true
    }

    fn turn_to_ball(&mut self, world: &WorldSnapshot) -> bool {
        self.command = Some(BodyCommand::TurnToBall {
            ball: world.ball.position,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "server": { "use_offside": false },
        "cycles": [
            {
                "cycle": 1,
                "game_mode": "PlayOn",
                "me": { "unum": 9, "position": [24.88, 0.0], "stamina": 8000.0, "stamina_capacity": 130600.0 },
                "teammates": [ { "unum": 10 } ],
                "ball": { "position": [0.0, 0.0] },
                "intercept": { "self_reach": 30, "teammate_reach": 5, "opponent_reach": 10 },
                "defense_line_x": -30.0,
                "offside_line_x": 30.0
            },
            {
                "cycle": 2,
                "game_mode": "PlayOn",
                "me": { "unum": 9, "position": [0.0, 20.0], "stamina": 3000.0, "stamina_capacity": 130600.0 },
                "ball": { "position": [0.0, 0.0] },
                "intercept": { "self_reach": 30, "teammate_reach": 5, "opponent_reach": 10 },
                "defense_line_x": -30.0,
                "offside_line_x": 30.0
            },
            {
                "cycle": 3,
                "game_mode": "PlayOn",
                "me": { "unum": 9, "position": [2.0, 1.0], "stamina": 5000.0, "stamina_capacity": 130600.0 },
                "ball": { "position": [0.0, 0.0] },
                "intercept": { "self_reach": 2, "teammate_reach": 5, "opponent_reach": 10 },
                "defense_line_x": -30.0,
                "offside_line_x": 30.0
            },
            {
                "cycle": 4,
                "game_mode": "PlayOn",
                "me": { "unum": 9, "position": [1.0, 0.0], "stamina": 5000.0, "stamina_capacity": 130600.0,
                        "tackle_probability": 0.9 },
                "ball": { "position": [0.0, 0.0] },
                "intercept": { "self_reach": 1, "teammate_reach": 5, "opponent_reach": 0 },
                "defense_line_x": -30.0,
                "offside_line_x": 30.0
            }
        ]
    }"#;

    #[test]
    fn test_parse_fills_server_defaults() {
        let scenario = Scenario::parse(SCENARIO).unwrap();

        assert_eq!(scenario.cycles.len(), 4);
        assert!(!scenario.server.use_offside);
        assert_eq!(scenario.server.max_dash_power, 100.0);
        assert_eq!(scenario.server.ball_decay, 0.97);
    }

    #[test]
    fn test_parse_rejects_empty_scenario() {
        let err = Scenario::parse(r#"{ "cycles": [] }"#).unwrap_err();
        assert!(matches!(err, ScenarioError::Empty));
        assert_eq!(err.to_string(), "scenario has no cycles");
    }

    #[test]
    fn test_parse_reports_json_errors() {
        let err = Scenario::parse("{ \"cycles\": ").unwrap_err();
        assert!(matches!(err, ScenarioError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Scenario::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ScenarioError::Io(_)));
    }

    #[test]
    fn test_replay_decisions() {
        let scenario = Scenario::parse(SCENARIO).unwrap();
        let outcomes = scenario.replay();

        // standing on the home position: turn to the ball
        assert!(matches!(outcomes[0].decision, MoveDecision::TurnToBall(_)));
        assert!(matches!(outcomes[0].command, Some(BodyCommand::TurnToBall { .. })));

        // far from home and tired: full power dash in recover mode
        match outcomes[1].command {
            Some(BodyCommand::Dash { power, .. }) => assert_eq!(power, 100.0),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(outcomes[1].recovering);

        assert_eq!(outcomes[2].decision, MoveDecision::Intercept);
        // stamina regime survives the intercept cycle
        assert!(outcomes[2].recovering);

        assert_eq!(outcomes[3].decision, MoveDecision::Tackle);
        assert_eq!(outcomes[3].command, Some(BodyCommand::Tackle { probability: 0.9 }));
    }

    #[test]
    fn test_replay_body_arrive_deadzone() {
        let scenario = Scenario::parse(SCENARIO).unwrap();
        let world = &scenario.cycles[0];
        let mut body = ReplayBody::default();

        assert!(!body.go_to_point(world, FieldPoint::new(25.0, 0.5), 1.0, 50.0));
        assert_eq!(body.take_command(), None);

        assert!(body.go_to_point(world, FieldPoint::new(30.0, 0.0), 1.0, 50.0));
        assert_eq!(
            body.take_command(),
            Some(BodyCommand::Dash {
                target: FieldPoint::new(30.0, 0.0),
                power: 50.0
            })
        );
    }

    #[test]
    fn test_replay_body_tackle_threshold() {
        let scenario = Scenario::parse(SCENARIO).unwrap();
        let mut world = scenario.cycles[0].clone();
        let mut body = ReplayBody::default();

        world.me.tackle_probability = 0.5;
        assert!(!body.tackle(&world, 0.8, 80.0));

        world.me.tackle_probability = 0.8;
        assert!(body.tackle(&world, 0.8, 80.0));
    }

    #[test]
    fn test_replay_body_tackle_body_angle() {
        let scenario = Scenario::parse(SCENARIO).unwrap();
        let mut world = scenario.cycles[0].clone();
        world.me.tackle_probability = 0.95;
        let mut body = ReplayBody::default();

        world.me.body_angle = -75.0;
        assert!(body.tackle(&world, 0.8, 80.0));

        world.me.body_angle = 120.0;
        assert!(!body.tackle(&world, 0.8, 80.0));

        // 300 degrees is -60 once folded
        world.me.body_angle = 300.0;
        assert!(body.tackle(&world, 0.8, 80.0));
    }

    #[test]
    fn test_kickoff_demo_holds_midfield_line() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/kickoff.json");
        let outcomes = Scenario::load(path).unwrap().replay();

        let names: Vec<_> = outcomes.iter().map(|outcome| outcome.decision.name()).collect();
        assert_eq!(
            names,
            vec!["go_to_point", "go_to_point", "intercept", "go_to_point", "go_to_point"]
        );

        // before kick off the forward waits on the halfway line
        match outcomes[0].command {
            Some(BodyCommand::Dash { target, power }) => {
                assert_eq!(target.x, 0.0);
                assert!(target.y.abs() < 1e-5);
                assert!((power - 76.5).abs() < 1e-4);
            }
            other => panic!("unexpected command {:?}", other),
        }

        assert!(outcomes[3].recovering);
        assert!(outcomes[4].recovering);
    }
}
