pub mod prayer_refresh;
