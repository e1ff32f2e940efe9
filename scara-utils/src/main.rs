// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use clap::Parser;
use scara_core::{
    algorithm::{ActuatorAngles, Elbow, ForwardKinematics, InverseKinematics, JointAngles},
    geometry::to_radians,
    Target,
};

mod config;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "SCARA arm kinematics utility", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short = 'c', long = "config", alias = "conf", value_name = "FILE")]
    config: Option<std::path::PathBuf>,
    /// Length of the first segment.
    #[arg(long)]
    l1: Option<f64>,
    /// Length of the second segment.
    #[arg(long)]
    l2: Option<f64>,
    /// Quiet output (no logging).
    #[arg(long)]
    quiet: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Solve the joint and actuator angles for a target.
    Solve {
        /// Target X coordinate.
        #[arg(allow_hyphen_values = true)]
        x: f64,
        /// Target Y coordinate.
        #[arg(allow_hyphen_values = true)]
        y: f64,
        /// Solve the mirror elbow branch.
        #[arg(long, conflicts_with_all = ["both", "nearest"])]
        mirror: bool,
        /// Solve both elbow branches.
        #[arg(long, conflicts_with = "nearest")]
        both: bool,
        /// Pick the branch closest to the current actuator pose (degrees).
        #[arg(long, num_args = 2, value_names = ["ALPHA", "BETA"], allow_hyphen_values = true)]
        nearest: Option<Vec<f64>>,
    },
    /// Compute the arm pose from joint angles.
    Forward {
        /// Base joint angle.
        #[arg(allow_hyphen_values = true)]
        a1: f64,
        /// Elbow joint angle.
        #[arg(allow_hyphen_values = true)]
        a2: f64,
        /// Angles are given in degrees.
        #[arg(long)]
        degrees: bool,
    },
    /// Check whether a target is reachable.
    Reach {
        /// Target X coordinate.
        #[arg(allow_hyphen_values = true)]
        x: f64,
        /// Target Y coordinate.
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
    /// Run the demonstration scenarios.
    Demo,
}

fn print_solution(label: &str, joint: &JointAngles) {
    println!(
        "{} {} » {}",
        Blue.bold().paint(label),
        Yellow.paint("Joint"),
        joint
    );
    println!(
        "{} {} » {}",
        Blue.bold().paint(label),
        Yellow.paint("Actuator"),
        ActuatorAngles::from(*joint)
    );
}

fn solve(
    ik: &InverseKinematics,
    target: Target,
    mirror: bool,
    both: bool,
    nearest: Option<Vec<f64>>,
) -> anyhow::Result<()> {
    let result = if let Some(current) = nearest {
        let current = ActuatorAngles::from_degrees(current[0], current[1]);
        log::debug!("Current actuator pose: {}", current);

        ik.solve_nearest(&target, &current).map(|(elbow, joint)| {
            let label = match elbow {
                Elbow::Primary => "Primary",
                Elbow::Mirror => "Mirror",
            };
            print_solution(label, &joint);
        })
    } else if both {
        ik.solutions(&target).map(|[primary, mirror]| {
            print_solution("Primary", &primary);
            print_solution("Mirror", &mirror);
        })
    } else if mirror {
        ik.solve_mirror(&target).map(|joint| print_solution("Mirror", &joint))
    } else {
        ik.solve(&target).map(|joint| print_solution("Primary", &joint))
    };

    if let Err(e) = result {
        log::error!("Target {} is out of reach", target);
        return Err(e.into());
    }

    Ok(())
}

fn reach(ik: &InverseKinematics, target: Target) {
    let geometry = ik.geometry();

    println!("Target:   {}", target);
    println!("Distance: {:.2}", target.distance());
    println!(
        "Reach:    [{:.2}, {:.2}]",
        geometry.min_reach(),
        geometry.max_reach()
    );

    if geometry.is_reachable(&target) {
        println!("Status:   {}", Green.bold().paint("reachable"));
    } else {
        println!("Status:   {}", Red.bold().paint("unreachable"));
    }
}

fn demo(ik: &InverseKinematics) {
    let geometry = ik.geometry();
    let right_angle =
        (geometry.segment1_length().powi(2) + geometry.segment2_length().powi(2)).sqrt();
    let max_reach = geometry.max_reach();

    let scenarios = [
        ("Move to (5, 5)", 5.0, 5.0),
        ("Right angle at the elbow", right_angle, 0.0),
        ("Move to (1, 190)", 1.0, 190.0),
        ("Stretch along the X axis", max_reach, 0.0),
        ("Stretch along the Y axis", 0.0, max_reach),
        ("Fold onto the origin", 0.0, 0.0),
        ("Outside of reach", max_reach, max_reach),
    ];

    for (description, x, y) in scenarios {
        let target = Target::new(x, y);
        let joint = ik.solve_unchecked(&target);

        println!("{} {}", Blue.bold().paint(description), target);
        println!("  {}", joint);
        println!("  {}", ActuatorAngles::from(joint));
    }
}

fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(LevelFilter::Off);
    log_config.set_thread_level(LevelFilter::Off);
    log_config.set_target_level(LevelFilter::Off);
    log_config.set_location_level(LevelFilter::Off);

    let log_level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = match &args.config {
        Some(path) => config::from_file::<config::Config>(path)?,
        None => config::Config::default(),
    }
    .with_overrides(args.l1, args.l2)?;

    log::debug!("{}", config.arm);

    let ik = InverseKinematics::new(config.arm);

    match args.command {
        Command::Solve {
            x,
            y,
            mirror,
            both,
            nearest,
        } => solve(&ik, Target::new(x, y), mirror, both, nearest)?,
        Command::Forward { a1, a2, degrees } => {
            let joint = if degrees {
                JointAngles::new(to_radians(a1), to_radians(a2))
            } else {
                JointAngles::new(a1, a2)
            };

            let fk = ForwardKinematics::new(config.arm);
            let elbow = fk.elbow(&joint);
            let effector = fk.solve(&joint);

            println!("{}", joint);
            println!("Elbow:    ({:.2}, {:.2})", elbow.x, elbow.y);
            println!("Effector: ({:.2}, {:.2})", effector.x, effector.y);
        }
        Command::Reach { x, y } => reach(&ik, Target::new(x, y)),
        Command::Demo => demo(&ik),
    }

    Ok(())
}
