use crate::model::event::RawEvent;

/// Built-in demonstration data: a fictional company history from 1950 to 2025.
pub fn sample_events() -> Vec<RawEvent> {
    SAMPLE
        .iter()
        .map(|&(date, label, description)| RawEvent::new(date, label, description))
        .collect()
}

const SAMPLE: [(&str, &str, &str); 24] = [
    ("Jan 1950", "Idea Sparked", "Founders aligned around a bold vision during weekend experiments."),
    ("Aug 1954", "First Workshop", "A small lab was built to explore early prototypes and materials."),
    ("Mar 1962", "Research Breakthrough", "Discovered a novel approach that made the core concept viable."),
    ("Sep 1970", "Company Incorporated", "Formal incorporation with five employees and a single product idea."),
    ("Jul 1976", "First Product", "Released the inaugural device that gained traction with hobbyists."),
    ("Nov 1983", "International Debut", "Opened limited distribution in Europe after industry conference buzz."),
    ("May 1988", "Series A", "Secured strategic capital to scale manufacturing capabilities."),
    ("Oct 1992", "Strategic Partnership", "Signed landmark deal with a major electronics maker."),
    ("Jan 1996", "Online Presence", "Launched the first website with digital catalog and ordering."),
    ("Sep 1998", "100K Customers", "Surpassed six figures in lifetime customers driven by mail campaigns."),
    ("Feb 2000", "Dot-Com Launch", "Rebuilt platform to support transactions and community features."),
    ("Nov 2001", "Beta Program", "Invited early adopters to shape the second generation product."),
    ("Jun 2003", "Series B", "Raised $15M to expand R&D and recruit engineering talent."),
    ("Mar 2005", "Flagship Release", "Shipped the modern flagship product with modular architecture."),
    ("Jan 2006", "Developer API", "Opened APIs so partners could build on top of platform services."),
    ("Sep 2007", "Mobile App", "Debuted a mobile companion that quickly became core to usage."),
    ("Apr 2009", "Cloud Platform", "Transitioned backend to a scalable cloud-native foundation."),
    ("Dec 2010", "Public Listing", "Completed IPO and rang the bell on the NASDAQ exchange."),
    ("Aug 2013", "Global Expansion", "Opened offices in APAC and localized product experience."),
    ("Jan 2016", "AI Research Lab", "Formed internal lab to explore applied machine learning."),
    ("Jun 2019", "1M Users", "Celebrated one million active accounts across all products."),
    ("Apr 2021", "Next Platform", "Launched platform redesign focused on reliability and speed."),
    ("Nov 2023", "Sustainability", "Committed to net-zero operations with verified offsets."),
    ("May 2025", "Future Labs", "Announced next-generation experimentation space for creators."),
];
