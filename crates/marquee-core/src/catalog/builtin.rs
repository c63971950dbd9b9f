use marquee_models::Movie;

/// The shipped catalog, grouped by genre.
pub(super) fn movies() -> Vec<Movie> {
    vec![
        // Action
        Movie::new(1, "Shadow Hunter", 2024, 8.4, "Action", "movie-poster-1.jpg")
            .with_description("An elite operative must navigate through a web of betrayal and conspiracy in this high-octane thriller."),
        Movie::new(7, "Desert Storm", 2025, 7.5, "Action", "movie-poster-1.jpg")
            .with_description("Survival against impossible odds in the harsh desert landscape."),
        Movie::new(11, "Steel Thunder", 2024, 8.1, "Action", "movie-poster-2.jpg")
            .with_description("A former soldier must stop a terrorist plot using advanced military technology."),
        Movie::new(15, "Crimson Dawn", 2024, 7.8, "Action", "movie-poster-3.jpg")
            .with_description("Elite mercenaries face their deadliest mission in war-torn territories."),
        Movie::new(19, "Velocity", 2025, 8.2, "Action", "movie-poster-1.jpg")
            .with_description("High-speed chase sequences define this adrenaline-pumping thriller."),
        Movie::new(23, "Phoenix Protocol", 2024, 7.9, "Action", "movie-poster-2.jpg")
            .with_description("Special forces operative uncovers a conspiracy that threatens global security."),

        // Romance
        Movie::new(2, "Midnight in Paris", 2024, 7.9, "Romance", "movie-poster-2.jpg")
            .with_description("A romantic journey through the enchanting streets of Paris at midnight."),
        Movie::new(12, "Spring Awakening", 2024, 8.0, "Romance", "movie-poster-3.jpg")
            .with_description("Two strangers find love during a magical spring in the countryside."),
        Movie::new(16, "Letters to Vienna", 2025, 7.6, "Romance", "movie-poster-1.jpg")
            .with_description("A long-distance love story told through heartfelt letters across continents."),
        Movie::new(20, "Summer's End", 2024, 8.3, "Romance", "movie-poster-2.jpg")
            .with_description("A bittersweet romance that blooms during one unforgettable summer."),
        Movie::new(24, "Dancing Hearts", 2024, 7.7, "Romance", "movie-poster-3.jpg")
            .with_description("Two professional dancers discover love and passion on the dance floor."),

        // Horror
        Movie::new(3, "The Awakening", 2024, 8.1, "Horror", "movie-poster-3.jpg")
            .with_description("Ancient forces stir as darkness threatens to consume everything."),
        Movie::new(13, "Whispers in the Dark", 2024, 7.4, "Horror", "movie-poster-1.jpg")
            .with_description("A family moves into a house with a terrifying supernatural presence."),
        Movie::new(17, "The Haunting Hour", 2025, 8.0, "Horror", "movie-poster-2.jpg")
            .with_description("Every night at 3 AM, something sinister stalks the residents of Elm Street."),
        Movie::new(21, "Blood Moon Rising", 2024, 7.8, "Horror", "movie-poster-3.jpg")
            .with_description("A small town faces an ancient curse that awakens during the blood moon."),
        Movie::new(25, "The Last Séance", 2024, 8.2, "Horror", "movie-poster-1.jpg")
            .with_description("A medium's final séance unleashes spirits that refuse to rest in peace."),

        // Thriller
        Movie::new(4, "Digital Fortress", 2024, 8.6, "Thriller", "movie-poster-1.jpg")
            .with_description("A cybersecurity expert uncovers a massive conspiracy threatening global infrastructure."),
        Movie::new(14, "Mind Games", 2024, 8.3, "Thriller", "movie-poster-2.jpg")
            .with_description("A psychological thriller about manipulation and mind control experiments."),
        Movie::new(18, "The Collector", 2025, 7.9, "Thriller", "movie-poster-3.jpg")
            .with_description("A detective hunts a serial killer who collects memories from victims."),
        Movie::new(22, "Parallel Lines", 2024, 8.4, "Thriller", "movie-poster-1.jpg")
            .with_description("Two strangers' lives intertwine in a web of conspiracy and deception."),
        Movie::new(26, "Silent Witness", 2024, 7.6, "Thriller", "movie-poster-2.jpg")
            .with_description("A witness protection case goes wrong, exposing corruption at the highest levels."),

        // Adventure
        Movie::new(5, "Ocean's Call", 2024, 7.7, "Adventure", "movie-poster-2.jpg")
            .with_description("Deep sea exploration leads to an extraordinary discovery of ancient civilizations."),
        Movie::new(27, "Mountain's Peak", 2025, 8.0, "Adventure", "movie-poster-3.jpg")
            .with_description("Climbers face deadly challenges on the world's most treacherous mountain."),
        Movie::new(28, "Lost Temple", 2024, 7.8, "Adventure", "movie-poster-1.jpg")
            .with_description("Archaeologists search for a legendary temple hidden in the Amazon jungle."),

        // Sci-Fi
        Movie::new(6, "Quantum Leap", 2025, 8.2, "Sci-Fi", "movie-poster-3.jpg")
            .with_description("Time travel meets quantum physics in this mind-bending thriller."),
        Movie::new(29, "Starbound", 2025, 8.5, "Sci-Fi", "movie-poster-2.jpg")
            .with_description("Humanity's first interstellar mission encounters alien intelligence."),
        Movie::new(30, "Neural Network", 2024, 7.9, "Sci-Fi", "movie-poster-1.jpg")
            .with_description("In a world where minds can be uploaded, identity becomes questionable."),

        // Drama
        Movie::new(8, "Lost Symphony", 2025, 8.0, "Drama", "movie-poster-2.jpg")
            .with_description("A musician's journey to rediscover their lost masterpiece."),
        Movie::new(10, "City of Dreams", 2024, 7.8, "Drama", "movie-poster-1.jpg")
            .with_description("Urban life and human connections in a bustling metropolis."),

        // Mystery
        Movie::new(9, "Night Vision", 2024, 8.3, "Mystery", "movie-poster-3.jpg")
            .with_description("Detective work meets supernatural elements in this gripping mystery."),
    ]
}
