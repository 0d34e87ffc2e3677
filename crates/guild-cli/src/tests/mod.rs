mod codec;
mod directory;
