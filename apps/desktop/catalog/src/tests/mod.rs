mod logger;
