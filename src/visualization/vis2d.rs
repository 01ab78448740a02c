//! Bevy playback of a finished trajectory
//!
//! Pure consumer of the integration output: the physics ran to completion
//! before the app starts, and these systems only read the history buffers.
//! Frames loop over the recorded steps with a modulo cursor, an orbit trail
//! is drawn up to the current step, and a small overlay shows the elapsed
//! simulated time in hours.

use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::Scenario;
use crate::simulation::trajectory::TrajectoryHistory;

#[derive(Component)]
struct BodyIndex(pub usize); // 0 = primary, 1 = secondary

#[derive(Component)]
struct ClockText;

/// Playback cursor over the finished history
#[derive(Resource)]
struct PlaybackState {
    history: TrajectoryHistory,
    frame: usize, // current history index
    scale: f32, // meters -> screen pixels
}

// Half-extent of the viewport region the orbit is fitted into, pixels
const VIEW_HALF: f32 = 320.0;

pub fn run_2d(scenario: Scenario, history: TrajectoryHistory) {
    println!(
        "run_2d: starting Bevy viewer, {} recorded steps",
        history.len()
    );

    let scale = fit_scale(&history);
    let playback = PlaybackState {
        history,
        frame: 0,
        scale,
    };

    App::new()
        .insert_resource(scenario)
        .insert_resource(playback)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                advance_frame_system,
                sync_transforms_system,
                trail_system,
                clock_text_system,
            ),
        )
        .run();
}

/// Meters-to-pixels factor that fits the whole trajectory on screen
fn fit_scale(history: &TrajectoryHistory) -> f32 {
    let extent = history
        .primary
        .iter()
        .chain(history.secondary.iter())
        .map(|x| x.norm())
        .fold(0.0_f64, f64::max);
    if extent > 0.0 {
        (VIEW_HALF as f64 / extent) as f32
    } else {
        1.0
    }
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    playback: Res<PlaybackState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let bodies = [&scenario.system.primary, &scenario.system.secondary];
    let colors = [Color::rgb(0.3, 0.5, 1.0), Color::GRAY];

    for (i, body) in bodies.into_iter().enumerate() {
        // True-scale radii are sub-pixel at orbital zoom; clamp so the
        // markers stay visible
        let radius_screen = (body.radius as f32 * playback.scale).max(4.0);
        let x = body.x.x as f32 * playback.scale;
        let y = body.x.y as f32 * playback.scale;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(colors[i])),
                transform: Transform::from_xyz(x, y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    // Elapsed-time overlay, top-left
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 20.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(12.0),
            ..Default::default()
        }),
        ClockText,
    ));
}

/// Advance the playback cursor, looping over the recorded steps
fn advance_frame_system(scenario: Res<Scenario>, mut playback: ResMut<PlaybackState>) {
    let len = playback.history.len();
    if len == 0 {
        return;
    }
    playback.frame = (playback.frame + scenario.playback.steps_per_frame) % len;
}

fn sync_transforms_system(
    playback: Res<PlaybackState>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    let i = playback.frame;
    let scale = playback.scale;
    for (BodyIndex(b), mut transform) in &mut query {
        let seq = if *b == 0 {
            &playback.history.primary
        } else {
            &playback.history.secondary
        };
        if let Some(x) = seq.get(i) {
            transform.translation.x = x.x as f32 * scale;
            transform.translation.y = x.y as f32 * scale;
        }
    }
}

/// Draw the orbit trail up to the current frame
fn trail_system(scenario: Res<Scenario>, playback: Res<PlaybackState>, mut gizmos: Gizmos) {
    if !scenario.playback.trail {
        return;
    }
    let i = playback.frame;
    let scale = playback.scale;
    for (seq, color) in [
        (&playback.history.primary, Color::rgb(0.2, 0.3, 0.6)),
        (&playback.history.secondary, Color::rgb(0.4, 0.4, 0.4)),
    ] {
        gizmos.linestrip_2d(
            seq[..=i.min(seq.len() - 1)]
                .iter()
                .map(|x| Vec2::new(x.x as f32 * scale, x.y as f32 * scale)),
            color,
        );
    }
}

fn clock_text_system(
    scenario: Res<Scenario>,
    playback: Res<PlaybackState>,
    mut query: Query<&mut Text, With<ClockText>>,
) {
    let hours = playback.frame as f64 * scenario.parameters.dt / 3600.0;
    for mut text in &mut query {
        text.sections[0].value = format!("t = {hours:.1} h");
    }
}
