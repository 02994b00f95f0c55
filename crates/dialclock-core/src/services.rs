pub mod tick_sound;
