use crate::{Config, ControlMode, Events, InputState, KeyQueue, Score, Side};

/// Apply queued key transitions to the input state.
///
/// Toggles and debug score keys fire on the released-to-pressed edge only,
/// so host key-repeat does not retrigger them.
pub fn ingest_keys(
    queue: &mut KeyQueue,
    input: &mut InputState,
    mode: &mut ControlMode,
    score: &mut Score,
    config: &Config,
    events: &mut Events,
) {
    let keys = &config.keys;
    for transition in queue.drain() {
        let was_pressed = input.is_pressed(&transition.key);
        input.set_key(&transition.key, transition.pressed);

        if !transition.pressed || was_pressed {
            continue;
        }

        if transition.key == keys.manual_toggle {
            mode.toggle();
            events.mode_toggled = true;
            log::debug!("Ball control switched to {:?}", mode);
        } else if config.debug_controls {
            let side = if transition.key == keys.point_left {
                Some(Side::Left)
            } else if transition.key == keys.point_right {
                Some(Side::Right)
            } else {
                None
            };
            if let Some(side) = side {
                score.shift_point(side);
                events.score_adjusted = true;
                log::debug!("Debug score adjustment for {:?}: {}", side, score);
            }
        }
    }
}
