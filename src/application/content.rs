//! Fixed copy shown on the home, about and contact pages.

pub const HOME_STARTING_CONTENT: &str = "Welcome Home, Dear Writer! Embrace this canvas of endless possibilities, where every word you write holds the power to create, heal, and inspire. Pour your heart out, weave tales of joy, resilience, and growth, for here, your voice finds wings to soar. This is a sanctuary for the dreamers, the wanderers, and the seekers of solace in the written word. Let your thoughts dance across these pages, and together, let's weave a tapestry of shared experiences, a testament to the beauty of life's fleeting moments.";

pub const ABOUT_CONTENT: &str = "Welcome to our Daily Journal, a sanctuary for your thoughts, emotions, and memories. This space is dedicated to empowering you to embrace your inner voice, unleash your creativity, and paint your life's canvas with words. We believe that every story matters, and yours is a masterpiece waiting to be penned. So, step into this realm of self-expression and join us in celebrating the beauty of your unique journey.";

pub const CONTACT_CONTENT: &str = "Let's Connect! We would love to hear from you and become a part of your journaling journey. Whether you want to share your thoughts, seek inspiration, or simply say hello, drop us a line. Our virtual doors are always open to welcome fellow dreamers, storytellers, and memory-makers. Reach out, and let your words find a home in this space of camaraderie and positivity.";
