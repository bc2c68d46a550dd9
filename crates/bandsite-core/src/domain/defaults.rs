use super::content::{Album, BandMember, ContentDocument, SocialLink, TourDate};

fn member(name: &str, role: &str, bio: &str) -> BandMember {
  BandMember { name: name.into(), role: role.into(), bio: bio.into() }
}

fn album(title: &str, year: i32, tracks: &[&str], description: &str, featured: bool) -> Album {
  Album {
    title: title.into(),
    year,
    tracks: tracks.iter().map(|t| t.to_string()).collect(),
    description: description.into(),
    featured,
  }
}

fn show(date: &str, venue: &str, city: &str, ticket_link: Option<&str>, sold_out: Option<bool>) -> TourDate {
  TourDate {
    date: date.into(),
    venue: venue.into(),
    city: city.into(),
    ticket_link: ticket_link.map(Into::into),
    sold_out,
  }
}

fn social(platform: &str, url: &str, handle: &str) -> SocialLink {
  SocialLink { platform: platform.into(), url: url.into(), handle: handle.into() }
}

/// Contenido de fábrica: lo que ve cualquier visitante antes de la primera
/// edición y lo que vuelve a aparecer tras un reset.
impl Default for ContentDocument {
  fn default() -> Self {
    const TICKETS: &str = "https://example.com/tickets";

    ContentDocument {
      hero_title: "LENAX".into(),
      hero_tagline: "Cosmic Horror Fueled Nightmares".into(),
      hero_cta_primary: "Enter the Void".into(),
      hero_cta_secondary: "Join the Coven".into(),

      band_bio: "Originally conceived as a solo project by Venomous to satisfy a longing need to create \
                 music, Lenax quickly evolved from a one-off endeavor into a full band driven by an \
                 infectious love for live performance. About 18 months after their first show and \
                 following two EPs, the band released their full-length debut \"Infection.\"\n\n\
                 Lenax's music conveys a drive towards individuality and free will, using occult and \
                 cosmic horror themes to explore deeper philosophical concepts beyond simple religious \
                 rebellion. Their sound pays homage to influences like Immortal, Enslaved, Watain, and \
                 Dark Funeral while establishing something entirely new in the realm of melodic black metal."
        .into(),
      band_members: vec![
        member(
          "Venomous",
          "Vocals/Guitar",
          "Main songwriter and creative director, driving the cosmic horror vision of Lenax through \
           otherworldly compositions and eldritch vocals.",
        ),
        member(
          "Mordred",
          "Guitar",
          "Collaborates on songwriting, weaving intricate melodic passages that bridge the void between \
           aggression and atmosphere.",
        ),
        member(
          "Bones",
          "Drums",
          "The rhythmic foundation that anchors Lenax's cosmic chaos, delivering thunderous beats from \
           the depths of space and time.",
        ),
      ],
      location: "Nashville, Tennessee".into(),
      formed: "2022".into(),
      genre: "Melodic Black Metal with Cosmic Horror Themes".into(),

      albums: vec![
        album(
          "Infection",
          2025,
          &[
            "Worship Hymn",
            "Leeches",
            "Chains",
            "Crossroad Black",
            "Hive Mind Apocalypse",
            "We Are Legion",
            "Plague Bringer",
            "Overdrive",
            "Throne of the Forsaken",
          ],
          "The full-length debut featuring cosmic portal artwork and nine tracks of dimensional horror.",
          true,
        ),
        album(
          "Purity",
          2023,
          &[],
          "EP release showcasing the band's early exploration into cosmic horror themes.",
          false,
        ),
        album("Hellscape Vol I (The Voices)", 2022, &[], "Early release capturing raw underground energy.", false),
      ],
      primary_platform: "Bandcamp".into(),
      primary_platform_url: "https://lenaxmetal.bandcamp.com".into(),

      tour_dates: vec![
        show("2025-03-15", "The Basement East", "Nashville, TN", Some(TICKETS), Some(false)),
        show("2025-04-02", "Underground Arts", "Philadelphia, PA", Some(TICKETS), Some(false)),
      ],

      email: "LenaxMetal@gmail.com".into(),
      social_links: vec![
        social("Bandcamp", "https://lenaxmetal.bandcamp.com", "lenaxmetal"),
        social("Facebook", "https://facebook.com/LenaxMetal", "LenaxMetal"),
        social("Instagram", "https://instagram.com/LenaxMetal", "@LenaxMetal"),
        social("Spotify", "https://open.spotify.com/artist/lenax", "Lenax"),
      ],
      reviews: vec![
        "\"A must-listen for fans of Watain, Immortal, and Enslaved\" - The Headbanging Moose".into(),
        "\"Raw yet melodic and surprisingly catchy\" - Metal Crypt".into(),
        "\"Lenax definitely has the chops to do some great things\" - Dead Rhetoric".into(),
      ],
    }
  }
}
