pub const AUTOPLAY_DELAY_MS: u64 = 5000;           // Time between two autoplay advances (ms)
pub const SWIPE_THRESHOLD: f32 = 50.0;             // Minimum horizontal travel for a swipe (pixels)

pub const LIVE_REGION_ID: &str = "slider-live-region"; // Id of the off-screen announcement region

pub const RENDER_WIDTH: i32 = 1280;                // Default window width
pub const RENDER_HEIGHT: i32 = 560;                // Default window height
pub const FPS: u32 = 60;                           // Frames per second of the desktop host
