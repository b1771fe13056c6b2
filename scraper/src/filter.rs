use scout_common::Lead;

/// Lowercased text after the last `@`, or empty when there is none.
pub fn email_domain(email: &str) -> String {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_lowercase())
        .unwrap_or_default()
}

/// True when a blocklist entry occurs in the address's domain or mailbox name.
///
/// Entries are expected lowercased (see `RunConfig`). The mailbox name is
/// checked too so that `no-reply@company.com` is caught by `no-reply`.
pub fn is_blocked(email: &str, blocklist: &[String]) -> bool {
    let domain = email_domain(email);
    let mailbox = email
        .rsplit_once('@')
        .map(|(local, _)| local.to_lowercase())
        .unwrap_or_default();
    blocklist
        .iter()
        .any(|blocked| domain.contains(blocked.as_str()) || mailbox.contains(blocked.as_str()))
}

/// Removes every lead whose address is blocked: a blocklist entry found in
/// either the domain or the mailbox name drops the lead, so
/// `noreply.jobs@studio.com` goes even though its domain is clean.
pub fn filter_leads(leads: Vec<Lead>, blocklist: &[String]) -> Vec<Lead> {
    leads
        .into_iter()
        .filter(|lead| !is_blocked(&lead.email, blocklist))
        .collect()
}
