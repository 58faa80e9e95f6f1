/// Client-side pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Detection,
    /// Raw path segment; validated by the upload page, not the router.
    DetectionUpload(String),
    SignIn,
    SignUp,
    Profile,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path
            .trim_start_matches('/')
            .trim_end_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => AppRoute::Home,
            ["detection"] => AppRoute::Detection,
            ["detection", animal] => AppRoute::DetectionUpload(animal.to_string()),
            ["signin"] => AppRoute::SignIn,
            ["signup"] => AppRoute::SignUp,
            ["profile"] => AppRoute::Profile,
            _ => AppRoute::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            AppRoute::Home => "/".into(),
            AppRoute::Detection => "/detection".into(),
            AppRoute::DetectionUpload(animal) => format!("/detection/{}", animal),
            AppRoute::SignIn => "/signin".into(),
            AppRoute::SignUp => "/signup".into(),
            AppRoute::Profile => "/profile".into(),
            AppRoute::NotFound => "/404".into(),
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            AppRoute::Detection | AppRoute::DetectionUpload(_) | AppRoute::Profile
        )
    }

    /// Where to actually go, given whether a session exists.
    pub fn guard(self, signed_in: bool) -> Self {
        if self.requires_session() && !signed_in {
            AppRoute::SignIn
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/detection"), AppRoute::Detection);
        assert_eq!(AppRoute::from_path("/detection/"), AppRoute::Detection);
        assert_eq!(
            AppRoute::from_path("/detection/Dog"),
            AppRoute::DetectionUpload("Dog".into())
        );
        assert_eq!(AppRoute::from_path("/signin"), AppRoute::SignIn);
        assert_eq!(AppRoute::from_path("/signup"), AppRoute::SignUp);
        assert_eq!(AppRoute::from_path("/profile"), AppRoute::Profile);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/detection/dog/extra"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Detection,
            AppRoute::DetectionUpload("cow".into()),
            AppRoute::SignIn,
            AppRoute::SignUp,
            AppRoute::Profile,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn protected_pages_redirect_without_session() {
        assert_eq!(AppRoute::Profile.guard(false), AppRoute::SignIn);
        assert_eq!(AppRoute::DetectionUpload("dog".into()).guard(false), AppRoute::SignIn);
        assert_eq!(AppRoute::Profile.guard(true), AppRoute::Profile);
        assert_eq!(AppRoute::Home.guard(false), AppRoute::Home);
        assert_eq!(AppRoute::SignUp.guard(false), AppRoute::SignUp);
    }
}
