#![allow(dead_code)]

use std::collections::HashMap;

use mdp_agents::mdp::MarkovDecisionProcess;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cell {
    Pos(usize),
    Terminal,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Exit,
}

/// One-row grid. The rightmost cell only allows `Exit`, which pays
/// `exit_reward` and ends the episode; every other move pays `living_reward`.
/// With `slip > 0` a move leaves the agent in place with that probability.
#[derive(Debug, Clone)]
pub struct Corridor {
    pub length: usize,
    pub exit_reward: f64,
    pub living_reward: f64,
    pub slip: f64,
}

impl Corridor {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            exit_reward: 1.0,
            living_reward: 0.0,
            slip: 0.0,
        }
    }

    pub fn living_reward(mut self, living_reward: f64) -> Self {
        self.living_reward = living_reward;
        self
    }

    pub fn slip(mut self, slip: f64) -> Self {
        self.slip = slip;
        self
    }

    pub fn goal(&self) -> Cell {
        Cell::Pos(self.length - 1)
    }
}

impl MarkovDecisionProcess for Corridor {
    type State = Cell;
    type Action = Move;

    fn states(&self) -> Vec<Cell> {
        let mut states: Vec<Cell> = (0..self.length).map(Cell::Pos).collect();
        states.push(Cell::Terminal);
        states
    }

    fn possible_actions(&self, state: &Cell) -> Vec<Move> {
        match *state {
            Cell::Terminal => vec![],
            cell if cell == self.goal() => vec![Move::Exit],
            Cell::Pos(_) => vec![Move::Left, Move::Right],
        }
    }

    fn transition_states_and_probs(&self, state: &Cell, action: &Move) -> Vec<(Cell, f64)> {
        let position = match *state {
            Cell::Pos(position) => position,
            Cell::Terminal => return vec![],
        };
        let target = match action {
            Move::Exit => return vec![(Cell::Terminal, 1.0)],
            Move::Left => position.saturating_sub(1),
            Move::Right => (position + 1).min(self.length - 1),
        };
        if self.slip > 0.0 && target != position {
            vec![
                (Cell::Pos(target), 1.0 - self.slip),
                (Cell::Pos(position), self.slip),
            ]
        } else {
            vec![(Cell::Pos(target), 1.0)]
        }
    }

    fn reward(&self, _state: &Cell, action: &Move, _next_state: &Cell) -> f64 {
        match action {
            Move::Exit => self.exit_reward,
            _ => self.living_reward,
        }
    }

    fn is_terminal(&self, state: &Cell) -> bool {
        *state == Cell::Terminal
    }
}

type Name = &'static str;

/// MDP written out state by state, for hand-built edge cases.
#[derive(Debug, Clone, Default)]
pub struct TableMdp {
    states: Vec<Name>,
    terminals: Vec<Name>,
    actions: HashMap<Name, Vec<Name>>,
    outcomes: HashMap<(Name, Name), Vec<(Name, f64, f64)>>,
}

impl TableMdp {
    pub fn new(states: &[Name]) -> Self {
        Self {
            states: states.to_vec(),
            ..Self::default()
        }
    }

    pub fn terminal(mut self, state: Name) -> Self {
        self.terminals.push(state);
        self
    }

    /// Adds `action` to `state` with `(next_state, probability, reward)`
    /// outcomes.
    pub fn action(mut self, state: Name, action: Name, outcomes: &[(Name, f64, f64)]) -> Self {
        self.actions.entry(state).or_default().push(action);
        self.outcomes.insert((state, action), outcomes.to_vec());
        self
    }
}

impl MarkovDecisionProcess for TableMdp {
    type State = Name;
    type Action = Name;

    fn states(&self) -> Vec<Name> {
        self.states.clone()
    }

    fn possible_actions(&self, state: &Name) -> Vec<Name> {
        self.actions.get(state).cloned().unwrap_or_default()
    }

    fn transition_states_and_probs(&self, state: &Name, action: &Name) -> Vec<(Name, f64)> {
        self.outcomes
            .get(&(*state, *action))
            .map(|outcomes| outcomes.iter().map(|(next, p, _)| (*next, *p)).collect())
            .unwrap_or_default()
    }

    fn reward(&self, state: &Name, action: &Name, next_state: &Name) -> f64 {
        self.outcomes
            .get(&(*state, *action))
            .and_then(|outcomes| outcomes.iter().find(|(next, _, _)| next == next_state))
            .map(|(_, _, reward)| *reward)
            .unwrap_or(0.0)
    }

    fn is_terminal(&self, state: &Name) -> bool {
        self.terminals.contains(state)
    }
}

/// A state offering two actions that both exit with the same reward.
pub fn fork(first: Name, second: Name) -> TableMdp {
    TableMdp::new(&["fork", "end"])
        .terminal("end")
        .action("fork", first, &[("end", 1.0, 1.0)])
        .action("fork", second, &[("end", 1.0, 1.0)])
}
