// Everything the page says about its owner lives here. There is no runtime
// config: edit and rebuild.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asset {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A PDF shown in an embedded viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Document {
    pub title: &'static str,
    pub src: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub owner: &'static str,
    pub headline: &'static str,
    pub contact_email: &'static str,
    pub avatar: Asset,
    pub links: &'static [SocialLink],
    pub documents: &'static [Document],
}

impl Profile {
    pub fn greeting(&self) -> String {
        format!("Hi, I'm {}", self.owner)
    }

    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved.", year, self.owner)
    }
}

pub const PROFILE: Profile = Profile {
    owner: "James Thuranira",
    headline: "Full-Stack Software Developer | Blockchain Enthusiast | Problem Solver",
    contact_email: "jamesyourmail@example.com",
    avatar: Asset {
        src: "/official profile.jpeg",
        alt: "Profile Picture",
    },
    links: &[
        SocialLink {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/james-thuranira-b24170233?utm_source=share&utm_campaign=share_via&utm_content=profile&utm_medium=android_app",
        },
        SocialLink {
            label: "GitHub",
            href: "https://github.com/james1478",
        },
    ],
    documents: &[
        Document {
            title: "Workplace Recommendation Letter",
            src: "/James-recommedation-Letter.pdf",
        },
        Document {
            title: "My CV",
            src: "/James_Muriithi_Thuranira_CV.pdf",
        },
    ],
};
