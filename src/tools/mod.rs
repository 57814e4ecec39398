mod input;
mod registry;

pub use input::{
    LinkedInInput, PostAudience, PostTone, PresentationInput, ResumeInput, SlideCount,
    ToolInput, VideoFormat, VideoTone, YouTubeInput, DEFAULT_SLIDES, MAX_SLIDES, MIN_SLIDES,
};
pub use registry::{all, find, find_by_key, ToolDescriptor, ToolId};
