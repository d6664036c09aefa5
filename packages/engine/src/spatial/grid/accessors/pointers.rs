use super::super::*;

impl Grid {
    // === Raw pointers for JS interop ===
    // Buffers swap on every step; JS must re-read these after `step()`.
    pub fn alive_ptr(&self) -> *const u8 {
        self.front.alive.as_ptr()
    }

    pub fn streak_ptr(&self) -> *const i32 {
        self.front.streak.as_ptr()
    }
}
