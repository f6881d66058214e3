//! Keyboard input handling

use game_core::{KeyBindings, SharedKeyQueue};

/// Keys the game uses; the browser's default action (scrolling) is suppressed
/// for these.
pub fn is_game_key(key: &str, keys: &KeyBindings) -> bool {
    [
        &keys.left_up,
        &keys.left_down,
        &keys.right_up,
        &keys.right_down,
        &keys.manual_toggle,
        &keys.ball_up,
        &keys.ball_down,
        &keys.ball_left,
        &keys.ball_right,
        &keys.point_left,
        &keys.point_right,
    ]
    .into_iter()
    .any(|bound| bound == key)
}

/// Record a key transition for the next tick
pub fn handle_key(queue: &SharedKeyQueue, key: &str, pressed: bool) {
    queue.borrow_mut().push(key, pressed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_keys() {
        let keys = KeyBindings::default();
        assert!(is_game_key("ArrowUp", &keys));
        assert!(is_game_key("m", &keys));
        assert!(!is_game_key("F5", &keys));
    }

    #[test]
    fn test_handle_key_queues_transition() {
        let queue = SharedKeyQueue::default();
        handle_key(&queue, "w", true);
        handle_key(&queue, "w", false);
        assert_eq!(queue.borrow().len(), 2);
    }
}
