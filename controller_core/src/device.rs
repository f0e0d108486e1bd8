use crate::runtime::DeviceProbe;

const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Case-insensitive user-agent sniff for handheld devices.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| ua.contains(marker))
}

#[derive(Debug, Clone)]
pub struct UserAgentProbe {
    mobile: bool,
}

impl UserAgentProbe {
    pub fn new(user_agent: &str) -> Self {
        Self {
            mobile: is_mobile_user_agent(user_agent),
        }
    }
}

impl DeviceProbe for UserAgentProbe {
    fn is_mobile(&self) -> bool {
        self.mobile
    }
}
