use crate::game::geometry::Ball;

/// Predicts the y coordinate where the ball's current line of travel crosses
/// `paddle_x`, then adds `error`.
///
/// The ball path is treated as an infinite line, so the prediction ignores wall
/// bounces and direction of travel. Returns `None` for a (near) vertical
/// trajectory, which has no crossing.
pub fn calculate_ai_y_pos(error: f32, ball: &Ball, paddle_x: f32) -> Option<f32> {
    let velocity = ball.velocity;
    if velocity.x.abs() <= f32::EPSILON {
        return None;
    }

    let gradient = velocity.y / velocity.x;
    let intercept = ball.center.y - gradient * ball.center.x;
    let y = gradient * paddle_x + intercept;

    Some(y + error)
}
