/// Read-only identity of the signed-in user for a single request.
///
/// Built once at the request boundary and passed down; nothing below the
/// handlers reaches for ambient session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    steam_id: String,
}

impl Session {
    pub fn new(steam_id: &str) -> Session {
        Session {
            steam_id: steam_id.to_owned(),
        }
    }

    /// Recovers the steam id from an identity claim.
    ///
    /// The OpenID layer stores `<steamid64>@steamcommunity.com` in the email
    /// claim, so a 17-digit prefix is the id itself. A claim that is already
    /// a bare id passes through unchanged.
    pub fn from_claim(claim: &str) -> Session {
        let digits = claim.chars().take_while(|c| c.is_ascii_digit()).count();
        match digits >= STEAM_ID_LEN {
            true => Session {
                steam_id: claim[..STEAM_ID_LEN].to_owned(),
            },
            false => Session {
                steam_id: claim.to_owned(),
            },
        }
    }

    pub fn steam_id(&self) -> &str {
        &self.steam_id
    }
}

const STEAM_ID_LEN: usize = 17;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_with_email_suffix_yields_bare_id() {
        let session = Session::from_claim("76561198000000042@steamcommunity.com");
        assert_eq!(session.steam_id(), "76561198000000042");
    }

    #[test]
    fn bare_id_claim_passes_through() {
        let session = Session::from_claim("76561198000000042");
        assert_eq!(session.steam_id(), "76561198000000042");
    }

    #[test]
    fn short_claim_is_kept_verbatim() {
        let session = Session::from_claim("steamid1");
        assert_eq!(session.steam_id(), "steamid1");
    }
}
