//! Disposable-domain detection for registration email addresses.
//!
//! The main list is a static snapshot of well-known throwaway providers; the
//! extension list collects domains reported after the snapshot was taken.
//! A domain counts as disposable if it matches a listed domain exactly or is
//! a subdomain of one.

/// Known disposable mailbox domains.
const DISPOSABLE_DOMAINS: &[&str] = &[
    "0-mail.com",
    "10minutemail.com",
    "10minutemail.net",
    "20minutemail.com",
    "33mail.com",
    "anonbox.net",
    "anonymbox.com",
    "binkmail.com",
    "bobmail.info",
    "burnermail.io",
    "byom.de",
    "chacuo.net",
    "courriel.fr.nf",
    "crazymailing.com",
    "cuvox.de",
    "dayrep.com",
    "deadaddress.com",
    "despam.it",
    "discard.email",
    "discardmail.com",
    "disposableinbox.com",
    "dispostable.com",
    "dodgeit.com",
    "dropmail.me",
    "dumpmail.de",
    "easytrashmail.com",
    "einrot.com",
    "emailondeck.com",
    "emailsensei.com",
    "emailtemporanea.net",
    "emltmp.com",
    "ethereal.email",
    "evopo.com",
    "explodemail.com",
    "fakeinbox.com",
    "fakemailgenerator.com",
    "fivemail.de",
    "fleckens.hu",
    "garbagemail.org",
    "getairmail.com",
    "getnada.com",
    "gettempmail.com",
    "grr.la",
    "guerrillamail.biz",
    "guerrillamail.com",
    "guerrillamail.de",
    "guerrillamail.info",
    "guerrillamail.net",
    "guerrillamail.org",
    "guerrillamailblock.com",
    "gustr.com",
    "harakirimail.com",
    "hidemail.de",
    "hmamail.com",
    "hulapla.de",
    "incognitomail.org",
    "inboxalias.com",
    "inboxbear.com",
    "inboxkitten.com",
    "instant-mail.de",
    "jetable.org",
    "jourrapide.com",
    "kasmail.com",
    "keemail.me",
    "killmail.com",
    "klzlk.com",
    "kurzepost.de",
    "lifebyfood.com",
    "lroid.com",
    "mail-temporaire.fr",
    "mail1a.de",
    "mail4trash.com",
    "mailcatch.com",
    "maildrop.cc",
    "maildu.de",
    "maileater.com",
    "mailexpire.com",
    "mailforspam.com",
    "mailfreeonline.com",
    "mailin8r.com",
    "mailinator.com",
    "mailinator.net",
    "mailinator.org",
    "mailinator2.com",
    "mailme24.com",
    "mailmetrash.com",
    "mailmoat.com",
    "mailnesia.com",
    "mailnull.com",
    "mailpoof.com",
    "mailsac.com",
    "mailseal.de",
    "mailtemp.info",
    "mailtothis.com",
    "mailzilla.com",
    "mega.zik.dj",
    "meltmail.com",
    "mierdamail.com",
    "mintemail.com",
    "moakt.com",
    "mohmal.com",
    "mt2015.com",
    "mvrht.com",
    "mytemp.email",
    "mytrashmail.com",
    "no-spam.ws",
    "nobulk.com",
    "noclickemail.com",
    "nogmailspam.info",
    "nomail.xl.cx",
    "nospam4.us",
    "nospamfor.us",
    "notmailinator.com",
    "nowmymail.com",
    "objectmail.com",
    "obobbo.com",
    "oneoffemail.com",
    "onewaymail.com",
    "owlpic.com",
    "pookmail.com",
    "proxymail.eu",
    "punkass.com",
    "quickinbox.com",
    "rcpt.at",
    "recode.me",
    "regbypass.com",
    "rhyta.com",
    "rppkn.com",
    "safetymail.info",
    "sandelf.de",
    "sharklasers.com",
    "shieldemail.com",
    "skeefmail.com",
    "slopsbox.com",
    "smellfear.com",
    "snakemail.com",
    "sneakemail.com",
    "sofort-mail.de",
    "sogetthis.com",
    "soodonims.com",
    "spam4.me",
    "spamavert.com",
    "spambob.net",
    "spambox.us",
    "spamcannon.com",
    "spamcon.org",
    "spamcorptastic.com",
    "spamday.com",
    "spamex.com",
    "spamfree24.org",
    "spamgourmet.com",
    "spamherelots.com",
    "spamhole.com",
    "spaminator.de",
    "spamkill.info",
    "spaml.com",
    "spammotel.com",
    "spamobox.com",
    "spamspot.com",
    "spamthis.co.uk",
    "spamtrail.com",
    "superrito.com",
    "suremail.info",
    "teleworm.us",
    "temp-mail.org",
    "temp-mail.ru",
    "tempail.com",
    "tempe-mail.com",
    "tempemail.co.za",
    "tempemail.com",
    "tempinbox.co.uk",
    "tempinbox.com",
    "tempmail.eu",
    "tempmail.it",
    "tempmaildemo.com",
    "tempmailer.com",
    "tempomail.fr",
    "temporaryemail.net",
    "temporaryinbox.com",
    "thankyou2010.com",
    "thisisnotmyrealemail.com",
    "throwawayemailaddress.com",
    "throwawaymail.com",
    "tilien.com",
    "tmailinator.com",
    "tradermail.info",
    "trash-mail.at",
    "trash-mail.com",
    "trash2009.com",
    "trashdevil.com",
    "trashemail.de",
    "trashmail.at",
    "trashmail.com",
    "trashmail.de",
    "trashmail.me",
    "trashmail.net",
    "trashymail.com",
    "tyldd.com",
    "uggsrock.com",
    "veryrealemail.com",
    "vomoto.com",
    "wegwerfadresse.de",
    "wegwerfemail.de",
    "wegwerfmail.de",
    "wegwerfmail.net",
    "wegwerfmail.org",
    "wh4f.org",
    "whyspam.me",
    "willhackforfood.biz",
    "willselfdestruct.com",
    "winemaven.info",
    "wronghead.com",
    "wuzup.net",
    "wuzupmail.net",
    "yepmail.net",
    "yogamaven.com",
    "yopmail.com",
    "yopmail.fr",
    "yopmail.net",
    "ypmail.webarnak.fr.eu.org",
    "zehnminutenmail.de",
    "zippymail.info",
    "zoemail.org",
];

/// Hand-curated additions reported since the snapshot above.
const EXTRA_DISPOSABLE_DOMAINS: &[&str] = &[
    "1secmail.com",
    "emailfake.com",
    "internxt.com",
    "mail.tm",
    "tempmail.plus",
    "tmpmail.org",
];

/// True when the address's domain (or any parent domain of it) is a known
/// disposable provider. Addresses without a domain part are not disposable;
/// they fail format validation instead.
pub fn is_disposable(email: &str) -> bool {
    let Some((_, domain)) = email.split_once('@') else {
        return false;
    };
    let domain = domain.trim().to_lowercase();

    DISPOSABLE_DOMAINS
        .iter()
        .chain(EXTRA_DISPOSABLE_DOMAINS)
        .any(|d| domain == *d || domain.ends_with(&format!(".{d}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_disposable_domain() {
        assert!(is_disposable("user@mailinator.com"));
        assert!(is_disposable("user@yopmail.com"));
    }

    #[test]
    fn test_extension_list_domain() {
        assert!(is_disposable("user@1secmail.com"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_disposable("user@MAILINATOR.COM"));
    }

    #[test]
    fn test_subdomain_of_disposable() {
        assert!(is_disposable("user@mx.mailinator.com"));
        assert!(is_disposable("user@a.b.yopmail.com"));
    }

    #[test]
    fn test_suffix_without_dot_boundary_not_matched() {
        // "notmailinator.com" is itself listed, but "xmailinator.com" is not
        // a subdomain of "mailinator.com" and must not suffix-match it.
        assert!(!is_disposable("user@xmailinator.com"));
    }

    #[test]
    fn test_regular_domains_pass() {
        assert!(!is_disposable("user@example.com"));
        assert!(!is_disposable("user@gmail.com"));
    }

    #[test]
    fn test_no_domain_is_not_disposable() {
        assert!(!is_disposable("not-an-email"));
    }
}
