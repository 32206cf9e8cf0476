//! vCard 3.0 export of a card, for the public page download button.

use super::draft::CardDraft;

/// Escape text values per RFC 2426.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.trim().chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            c => out.push(c),
        }
    }
    out
}

/// Render the draft as a vCard. Blank fields are left out.
pub fn to_vcard(draft: &CardDraft) -> String {
    let mut lines = vec!["BEGIN:VCARD".to_string(), "VERSION:3.0".to_string()];
    lines.push(format!("FN:{}", escape(&draft.full_name())));
    lines.push(format!(
        "N:{};{};;;",
        escape(&draft.last_name),
        escape(&draft.first_name)
    ));

    let c = &draft.contact;
    let optional = [
        ("ORG", &draft.company),
        ("TITLE", &draft.job_title),
        ("EMAIL", &c.email),
        ("TEL", &c.phone),
        ("URL", &c.website),
    ];
    for (tag, value) in optional {
        if !value.trim().is_empty() {
            lines.push(format!("{tag}:{}", escape(value)));
        }
    }
    for link in draft.social_links.filled() {
        lines.push(format!("URL:{}", escape(&link.url)));
    }
    if !c.address.trim().is_empty() {
        lines.push(format!("ADR:;;{};;;;", escape(&c.address)));
    }
    if !draft.bio.trim().is_empty() {
        lines.push(format!("NOTE:{}", escape(&draft.bio)));
    }
    lines.push("END:VCARD".to_string());
    lines.join("\r\n") + "\r\n"
}

/// `<first>-<last>.vcf`, falling back to `card.vcf`.
pub fn vcard_file_name(draft: &CardDraft) -> String {
    let stem: Vec<&str> = [draft.first_name.trim(), draft.last_name.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if stem.is_empty() {
        "card.vcf".to_string()
    } else {
        format!("{}.vcf", stem.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::social::SocialPlatform;

    #[test]
    fn test_vcard_fields() {
        let mut d = CardDraft::default();
        d.first_name = "Ahmed".into();
        d.last_name = "Mohammed".into();
        d.company = "Tech, Inc".into();
        d.contact.phone = "+966501234567".into();
        d.contact.address = "Riyadh".into();
        let card = to_vcard(&d);
        assert!(card.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
        assert!(card.contains("FN:Ahmed Mohammed\r\n"));
        assert!(card.contains("ORG:Tech\\, Inc\r\n"));
        assert!(card.contains("TEL:+966501234567\r\n"));
        assert!(card.contains("ADR:;;Riyadh;;;;\r\n"));
        assert!(!card.contains("EMAIL:"));
        assert!(card.ends_with("END:VCARD\r\n"));
    }

    #[test]
    fn test_social_links_exported_after_website() {
        let mut d = CardDraft::default();
        d.first_name = "Ahmed".into();
        d.contact.website = "https://ahmed.dev".into();
        let github = d.social_links.add();
        d.social_links.set_platform(&github, SocialPlatform::GitHub);
        d.social_links.set_url(&github, "https://github.com/ahmed");
        let blank = d.social_links.add();
        d.social_links.set_platform(&blank, SocialPlatform::Twitter);

        let card = to_vcard(&d);
        let website = card.find("URL:https://ahmed.dev\r\n").unwrap();
        let social = card.find("URL:https://github.com/ahmed\r\n").unwrap();
        assert!(website < social);
        assert_eq!(card.matches("URL:").count(), 2);
    }

    #[test]
    fn test_file_name() {
        let mut d = CardDraft::default();
        assert_eq!(vcard_file_name(&d), "card.vcf");
        d.first_name = "Lina".into();
        assert_eq!(vcard_file_name(&d), "Lina.vcf");
        d.last_name = "Haddad".into();
        assert_eq!(vcard_file_name(&d), "Lina-Haddad.vcf");
    }
}
