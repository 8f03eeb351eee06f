//! Haptic feedback intents. Bot API 6.1+.

use super::literal::closed_literal;

closed_literal! {
    /// Argument of `HapticFeedback.impactOccurred`.
    pub enum HapticImpactStyle {
        /// Collision between small or lightweight UI objects.
        Light => "light",
        Medium => "medium",
        Heavy => "heavy",
        /// Collision between hard or inflexible UI objects.
        Rigid => "rigid",
        /// Collision between soft or flexible UI objects.
        Soft => "soft",
    }
}

closed_literal! {
    /// Argument of `HapticFeedback.notificationOccurred`.
    pub enum HapticNotificationType {
        Error => "error",
        Success => "success",
        Warning => "warning",
    }
}
