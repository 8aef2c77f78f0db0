mod episode;
