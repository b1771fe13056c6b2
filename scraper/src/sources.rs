/// Search pages scraped on every run, in order. One page per source.
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://us.trabajo.org/jobs?q=graphic+designer",
    "https://gb.trabajo.org/jobs?q=graphic+designer",
    "https://ke.trabajo.org/jobs?q=graphic+designer",
    "https://remote.co/remote-jobs/search/?search_keywords=graphic+designer",
    "https://www.indeed.com/q-graphic-designer-jobs.html",
    "https://www.glassdoor.com/Job/graphic-designer-jobs-SRCH_KO0,17.htm",
    "https://www.linkedin.com/jobs/search/?keywords=graphic%20designer",
    "https://remoteok.com/remote-graphic+design-jobs",
    "https://www.unjobnet.org/jobs?keywords=graphic+design&location=",
    "https://weworkremotely.com/remote-jobs/search?term=graphic+designer",
    "https://www.flexjobs.com/search?search=graphic+designer",
    "https://dribbble.com/jobs?query=graphic+designer",
    "https://www.behance.net/joblist?search=graphic+designer",
    "https://www.myjobmag.co.ke/search/jobs?q=graphic+designer",
    "https://www.brightermonday.co.ke/jobs?q=graphic+designer",
    "https://www.fuzu.com/kenya/jobs?search=graphic+designer",
    "https://www.summitrecruitment-search.com/job-search/?search=graphic+designer",
    "https://shortlist.net/jobs/?search=graphic+designer",
    "https://www.myjobsinkenya.com/search?q=graphic+designer",
    "https://www.jobsinkenya.co.ke/search?q=graphic+designer",
    "https://opportunitiesforyoungkenyans.co.ke",
    "https://www.jobwebkenya.com/?s=graphic+designer",
    "https://www.kenyajob.com/job-vacancies-kenya?f%5B0%5D=im_field_offre_metiers%3A78",
    "https://cdl.co.ke/jobs",
    "https://ngojobsinafrica.com/?s=graphic+designer",
    "https://ke.bebee.com/jobs?q=graphic+designer",
];
