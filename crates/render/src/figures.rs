//! The figures the demo scripts save: the episode report, the synthetic
//! training panels and the policy architecture diagram.

use crate::canvas::{self, Color};
use crate::chart::{Figure, HistogramPanel, Plot, RefLine, Series, TextPanel};
use rl::metrics::{self, EpisodeSummary, Histogram};
use rl::registry;
use rl::synthetic::{SyntheticCurve, SYNTHETIC_LABEL};
use rl::{Rollout, Space};

pub const ANGLE_BINS: usize = 30;

/// Names of the two plotted state components. The second is also binned.
struct StateLabels {
    first: &'static str,
    second: &'static str,
    distribution: &'static str,
}

fn state_labels(env_id: &str) -> StateLabels {
    match env_id {
        registry::CART_POLE => StateLabels {
            first: "Cart Position",
            second: "Pole Angle",
            distribution: "Angle Distribution",
        },
        registry::PENDULUM => StateLabels {
            first: "cos(theta)",
            second: "Angular Velocity",
            distribution: "Angular Velocity Distribution",
        },
        _ => StateLabels { first: "obs[0]", second: "obs[2]", distribution: "obs[2] Distribution" },
    }
}

/// Side-by-side comparison of the demo episode with the bipedal task it
/// stands in for. Also printed by the console narration.
pub fn comparison_summary(summary: &EpisodeSummary, state_dim: usize, action_space: &Space) -> String {
    let action_kind = if action_space.is_discrete() { "discrete" } else { "continuous" };
    let action_dim = match action_space {
        Space::Discrete(n) => *n,
        Space::Box { .. } => action_space.dim(),
    };
    let success = if summary.is_success() { "Yes" } else { "No" };
    let rows = [
        (format!("- State Dim: {state_dim}"), "- State Dim: 42-44"),
        (format!("- Action Dim: {action_dim} ({action_kind})"), "- Action Dim: 10 (continuous)"),
        (format!("- Episode Length: {:3} steps", summary.steps), "- Episode Length: ~1000 steps"),
        (format!("- Total Reward: {:6.0}", summary.total_reward), "- Total Reward: ~300-500"),
        (format!("- Success: {success}"), "- Success: >95%"),
    ];

    let mut out = String::from("EPISODE SUMMARY & CASSIE COMPARISON\n");
    out.push_str(&"=".repeat(80));
    out.push_str("\n\n");
    out.push_str(&format!("{:<40}{}\n", "CartPole Demo:", "Cassie Bipedal Robot:"));
    for (left, right) in rows {
        out.push_str(&format!("{left:<40}{right}\n"));
    }
    out.push('\n');
    out.push_str(&format!("{:<40}{}\n", "Key Challenge: BALANCE", "Key Challenge: BALANCE + LOCOMOTION"));
    out.push_str(&format!(
        "{:<40}{}\n",
        "Solution: RL Policy (PPO)", "Solution: RL Policy (PPO) + Dual-History"
    ));
    out.push_str("\nBoth require learning to maintain stability while achieving a goal!");
    out
}

/// The six-panel report of one rollout (`complete_demo.png`).
pub fn episode_report(env_id: &str, rollout: &Rollout, action_space: &Space) -> Figure {
    let trace = &rollout.trace;
    let labels = state_labels(env_id);
    let first = metrics::column(trace.observations(), 0);
    let second = metrics::column(trace.observations(), 2);
    let cumulative = metrics::cumulative_sum(trace.rewards());
    let total = cumulative.last().copied().unwrap_or(0.0);
    let actions: Vec<f32> = trace.actions().iter().map(rl::Action::as_scalar).collect();

    let mut figure = Figure::new(1400, 1000, 3, 3)
        .with_title(format!("RL for Balance Control: {env_id} Environment (Analogous to Bipedal Locomotion)"));

    figure.place_span(
        0,
        0,
        1,
        2,
        Plot::new("State Evolution: Position and Orientation")
            .labels("Timestep", "State Value")
            .series(Series::indexed(&first, canvas::BLUE).labelled(labels.first))
            .series(Series::indexed(&second, canvas::ORANGE).labelled(labels.second))
            .with_legend(),
    );
    figure.place(
        0,
        2,
        Plot::new("Reward Signal")
            .labels("Timestep", "Reward")
            .series(Series::indexed(trace.rewards(), canvas::GREEN))
            .hline(RefLine::dashed(1.0, canvas::faded(canvas::RED, 0.5)).labelled("Goal"))
            .with_legend(),
    );

    let mut action_plot = Plot::new("Policy Actions")
        .labels("Timestep", "Action")
        .series(Series::indexed(&actions, canvas::ORANGE).steps());
    if let Space::Discrete(n) = action_space {
        let top = n.saturating_sub(1) as f32;
        action_plot = action_plot.y_limits(-0.1 * top.max(1.0), top + 0.1 * top.max(1.0));
        if *n == 2 {
            action_plot = action_plot.y_ticks(vec![(0.0, "Left".to_owned()), (1.0, "Right".to_owned())]);
        }
    }
    figure.place(1, 0, action_plot);

    figure.place(
        1,
        1,
        Plot::new(format!("Total Return: {total:.0}"))
            .labels("Timestep", "Cumulative Reward")
            .series(Series::indexed(&cumulative, canvas::BLUE)),
    );
    figure.place(
        1,
        2,
        HistogramPanel::new(
            labels.distribution,
            Histogram::new(&second, ANGLE_BINS),
            canvas::faded(canvas::PURPLE, 0.7),
        )
        .labels(labels.second, "Frequency"),
    );

    let summary = EpisodeSummary::from_rollout(rollout);
    figure.place_span(
        2,
        0,
        1,
        3,
        TextPanel::new(comparison_summary(&summary, trace.observation_dim(), action_space))
            .boxed(),
    );
    figure
}

/// Raw and smoothed colors of the staged training panels, in stage order.
const STAGE_COLORS: [(Color, Color); 4] = [
    (canvas::GRAY, canvas::GRAY),
    (canvas::BLUE, canvas::DARK_BLUE),
    (canvas::GREEN, canvas::DARK_GREEN),
    (canvas::PURPLE, canvas::PURPLE),
];

fn curve_plot(curve: &SyntheticCurve, raw: Color, smooth: Color) -> Plot {
    let mut plot = Plot::new(curve.title.as_str())
        .labels("Episode", "Return")
        .series(Series::indexed(&curve.returns, canvas::faded(raw, 0.3)).width(1));
    if let Some(window) = curve.smoothing_window {
        let smoothed = metrics::moving_average(&curve.returns, window);
        plot = plot.series(Series::new(smoothed.points().collect(), smooth).labelled("Smoothed"));
    }
    if let Some(target) = curve.target {
        plot = plot.hline(RefLine::dashed(target, canvas::RED).labelled("Target")).with_legend();
    }
    if let Some((low, high)) = curve.y_limits {
        plot = plot.y_limits(low, high);
    }
    plot
}

/// Up to four curves on a 2x2 grid (`training_stages.png`).
pub fn training_stages(curves: &[SyntheticCurve]) -> Figure {
    let mut figure = Figure::new(1200, 800, 2, 2)
        .with_title(format!("Simulated RL Training Progress ({SYNTHETIC_LABEL})"));
    for (i, (curve, (raw, smooth))) in curves.iter().zip(STAGE_COLORS).enumerate() {
        figure.place(i / 2, i % 2, curve_plot(curve, raw, smooth));
    }
    figure
}

/// One curve with its curriculum stage boundaries (`training_curve.png`).
pub fn training_curve(curve: &SyntheticCurve) -> Figure {
    let mut plot = curve_plot(curve, canvas::BLUE, canvas::DARK_BLUE)
        .labels("Training Episode", "Episode Return")
        .with_legend();
    for (stage, &boundary) in curve.stage_boundaries.iter().enumerate() {
        plot = plot.vline(
            RefLine::dashed(boundary as f32, canvas::faded(canvas::RED, 0.5))
                .labelled(format!("Stage {}->{}", stage + 1, stage + 2)),
        );
    }
    let mut figure = Figure::new(1000, 600, 1, 1);
    figure.place(0, 0, plot);
    figure
}

pub const ARCHITECTURE_DIAGRAM: &str = r"DUAL-HISTORY POLICY ARCHITECTURE

       Observations (40D)
               |
        +------+------+
        |             |
  Short History  Long History
   (10 steps)     (60 steps)
        |             |
       MLP           CNN
        |             |
        +------+------+
               |
            Combine
               |
              MLP
               |
         Actions (10D)";

/// The dual-history policy diagram (`architecture.png`).
pub fn architecture() -> Figure {
    let mut figure = Figure::new(1000, 600, 1, 1);
    figure.place(0, 0, TextPanel::new(ARCHITECTURE_DIAGRAM).centered().scale(3));
    figure
}
