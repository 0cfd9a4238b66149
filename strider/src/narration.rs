//! Console narration of the demos.
//!
//! All output goes through a [`Narrator`] wrapping any [`Write`], so the
//! binary hands it stdout and tests hand it a `Vec<u8>`.

use rl::metrics::{self, EpisodeSummary};
use rl::{Env, MakeError, Rollout};
use std::fmt::Display;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const WIDTH: usize = 70;

/// How the balance task maps onto bipedal locomotion.
pub const ANALOGY: &[(&str, &str)] = &[
    ("CartPole Balance", "Bipedal Robot Balance"),
    ("Pole angle", "Torso orientation"),
    ("Cart position", "Robot position"),
    ("Apply force", "Apply joint torques"),
    ("Keep upright", "Prevent falling"),
];

/// One block of the Cassie observation vector.
pub struct StateComponent {
    pub name: &'static str,
    /// Inclusive dimension range; equal bounds for a fixed size.
    pub dims: (usize, usize),
    pub description: &'static str,
}

impl StateComponent {
    fn dims_label(&self) -> String {
        match self.dims {
            (lo, hi) if lo == hi => lo.to_string(),
            (lo, hi) => format!("{lo}-{hi}"),
        }
    }
}

pub const CASSIE_STATE: &[StateComponent] = &[
    StateComponent { name: "Joint Positions", dims: (16, 16), description: "Angles of all joints" },
    StateComponent { name: "Joint Velocities", dims: (16, 16), description: "Angular velocities" },
    StateComponent { name: "Pelvis Orientation", dims: (4, 4), description: "Quaternion (x,y,z,w)" },
    StateComponent { name: "Pelvis Angular Velocity", dims: (3, 3), description: "Rotation rates" },
    StateComponent { name: "Foot Contacts", dims: (2, 2), description: "Left/Right ground contact" },
    StateComponent { name: "Command", dims: (1, 3), description: "Desired speed or jump target" },
];

/// Smallest and largest total observation size of [`CASSIE_STATE`].
pub fn cassie_state_dimension() -> (usize, usize) {
    CASSIE_STATE
        .iter()
        .fold((0, 0), |(lo, hi), c| (lo + c.dims.0, hi + c.dims.1))
}

pub struct Narrator<W> {
    out: W,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(WIDTH);
        writeln!(self.out, "{rule}\n{title}\n{rule}")
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "\n{title}\n{}", "-".repeat(WIDTH))
    }

    pub fn environment(&mut self, id: &str, fallback_reason: Option<&MakeError>) -> io::Result<()> {
        match fallback_reason {
            None => writeln!(self.out, "Environment loaded: {id}"),
            Some(reason) => writeln!(self.out, "Preferred environment skipped ({reason}); using {id}"),
        }
    }

    pub fn spaces<E: Env + ?Sized>(&mut self, env: &E) -> io::Result<()> {
        let observation_space = env.observation_space();
        writeln!(self.out, "\nState space: {observation_space}")?;
        writeln!(self.out, "Action space: {}", env.action_space())?;
        writeln!(self.out, "State dimensions: {}", observation_space.dim())
    }

    pub fn episode_result(&mut self, number: usize, rollout: &Rollout) -> io::Result<()> {
        writeln!(
            self.out,
            "Episode {number}: Reward = {:.2}, Steps = {}",
            rollout.trace.total_reward(),
            rollout.steps
        )
    }

    pub fn average_reward(&mut self, rollouts: &[Rollout]) -> io::Result<()> {
        let totals: Vec<f32> = rollouts.iter().map(|r| r.trace.total_reward()).collect();
        match metrics::mean(&totals) {
            Some(avg) => writeln!(self.out, "\nAverage Reward: {avg:.2}"),
            None => writeln!(self.out, "\nNo episodes were run."),
        }
    }

    pub fn analogy(&mut self) -> io::Result<()> {
        self.section("ANALOGY TO BIPEDAL LOCOMOTION:")?;
        for (balance, biped) in ANALOGY {
            writeln!(self.out, "{balance:<20}->  {biped}")?;
        }
        writeln!(self.out, "{}", "-".repeat(WIDTH))
    }

    pub fn episode_complete(&mut self, rollout: &Rollout) -> io::Result<()> {
        let summary = EpisodeSummary::from_rollout(rollout);
        writeln!(
            self.out,
            "Episode complete: {} steps, Total reward: {:.0} ({})",
            summary.steps, summary.total_reward, summary.end_reason
        )
    }

    pub fn saved(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Saved: {}", path.display())
    }

    /// Numbered list of the files a demo wrote, each with what it shows.
    pub fn files_created(&mut self, files: &[(PathBuf, &str)]) -> io::Result<()> {
        writeln!(self.out, "\nFiles created:")?;
        for (i, (path, what)) in files.iter().enumerate() {
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            writeln!(self.out, "  {}. {name} - {what}", i + 1)?;
        }
        Ok(())
    }

    /// The Cassie MDP written out for the slides.
    pub fn mdp_formulation(&mut self) -> io::Result<()> {
        self.banner("CASSIE ROBOT - MDP FORMULATION FOR SLIDES")?;

        self.section("STATE SPACE (Observations):")?;
        for component in CASSIE_STATE {
            writeln!(
                self.out,
                "  - {:25} | Dim: {:4} | {}",
                component.name,
                component.dims_label(),
                component.description
            )?;
        }
        let (lo, hi) = cassie_state_dimension();
        writeln!(self.out, "\n  TOTAL DIMENSION: ~{lo}-{hi} (Partially Observable)")?;

        self.section("ACTION SPACE:")?;
        writeln!(self.out, "  - 10 continuous values (one per actuated joint)")?;
        writeln!(self.out, "  - Range: [-1, 1] (normalized)")?;
        writeln!(self.out, "  - Represents target torques -> PD controller -> motors")?;

        self.section("REWARD FUNCTION:")?;
        writeln!(self.out, "  r(s,a) = w1*velocity_forward")?;
        writeln!(self.out, "         + w2*orientation_upright")?;
        writeln!(self.out, "         - w3*energy_consumption")?;
        writeln!(self.out, "         - w4*foot_impact")?;
        writeln!(self.out, "         - w5*termination_penalty")?;
        writeln!(self.out, "\n  Encourages: fast, stable, efficient locomotion")?;

        self.section("DYNAMICS:")?;
        writeln!(self.out, "  - Physics: MuJoCo simulator")?;
        writeln!(self.out, "  - Frequency: 30 Hz (dt = 0.033s)")?;
        writeln!(self.out, "  - Contact model: Soft contacts with friction")?;

        self.section("PARTIAL OBSERVABILITY:")?;
        writeln!(self.out, "  Cannot directly observe:")?;
        writeln!(self.out, "    x Ground friction coefficient")?;
        writeln!(self.out, "    x External forces (wind, pushes)")?;
        writeln!(self.out, "    x Robot mass/inertia changes")?;
        writeln!(self.out, "\n  Solution: Use observation history -> Dual-history controller")?;

        self.blank()?;
        self.banner("Copy this information into your presentation slides!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrate(f: impl FnOnce(&mut Narrator<Vec<u8>>) -> io::Result<()>) -> String {
        let mut narrator = Narrator::new(Vec::new());
        f(&mut narrator).unwrap();
        String::from_utf8(narrator.into_inner()).unwrap()
    }

    #[test]
    fn cassie_dimension_spans_command_sizes() {
        assert_eq!(cassie_state_dimension(), (42, 44));
    }

    #[test]
    fn mdp_lists_every_component_and_total() {
        let text = narrate(Narrator::mdp_formulation);
        for component in CASSIE_STATE {
            assert!(text.contains(component.name), "missing {}", component.name);
        }
        assert!(text.contains("Dim: 1-3"));
        assert!(text.contains("TOTAL DIMENSION: ~42-44"));
        assert!(text.contains("30 Hz"));
    }

    #[test]
    fn fallback_reason_is_reported() {
        let reason = MakeError::Unavailable { id: "BipedalWalker-v3".into(), reason: "no backend" };
        let text = narrate(|n| n.environment("CartPole-v1", Some(&reason)));
        assert!(text.contains("BipedalWalker-v3"));
        assert!(text.contains("using CartPole-v1"));
    }

    #[test]
    fn average_of_no_episodes_is_not_a_number() {
        let text = narrate(|n| n.average_reward(&[]));
        assert!(text.contains("No episodes"));
    }

    #[test]
    fn created_files_are_numbered_by_name() {
        let files = [
            (PathBuf::from("out/complete_demo.png"), "Comprehensive episode analysis"),
            (PathBuf::from("out/training_stages.png"), "Training progression simulation"),
        ];
        let text = narrate(|n| n.files_created(&files));
        assert!(text.contains("Files created:"));
        assert!(text.contains("  1. complete_demo.png - Comprehensive episode analysis"));
        assert!(text.contains("  2. training_stages.png - Training progression simulation"));
    }

    #[test]
    fn analogy_has_one_row_per_pair() {
        let text = narrate(Narrator::analogy);
        assert_eq!(text.matches("->").count(), ANALOGY.len());
    }
}
