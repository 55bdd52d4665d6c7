use serde::{Deserialize, Serialize};

/// A Gyazo account profile, as returned by `/api/users/me`.
#[derive(Serialize, Deserialize, Debug)]
pub struct Profile {
    pub email: String,

    /// Display name.
    pub name: String,

    /// User id.
    pub uid: String,

    /// URL of the profile image.
    pub profile_image: String,
}
